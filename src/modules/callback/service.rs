use super::dto::{CallbackPayload, CallbackResponse};
use super::error::CallbackError;
use crate::state::AppState;
use tracing::{error, info, warn};

pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Storage key of the video attached to a question.
pub fn object_key(question_id: &str) -> String {
    format!("questions/{}.mp4", question_id)
}

pub struct CallbackService;

impl CallbackService {
    /// Picks the question the callback belongs to: the one named in the
    /// metadata, else the configured default.
    pub fn resolve_question_id(
        payload: &CallbackPayload,
        default_question_id: Option<&str>,
    ) -> Result<String, CallbackError> {
        let question_id = payload
            .question_id()
            .or(default_question_id)
            .ok_or(CallbackError::MissingQuestionId)?;

        if question_id.contains('/') {
            return Err(CallbackError::InvalidPayload(format!(
                "Invalid questionId: {}",
                question_id
            )));
        }

        Ok(question_id.to_string())
    }

    pub async fn process(
        state: &AppState,
        payload: CallbackPayload,
    ) -> Result<CallbackResponse, CallbackError> {
        let download_url = match payload.download_url() {
            Some(url) if payload.is_completed() => url,
            _ => {
                info!(
                    "Ignoring callback for video {:?} with status {:?}",
                    payload.video_id, payload.status
                );
                return Err(CallbackError::NotReady);
            }
        };

        let question_id =
            Self::resolve_question_id(&payload, state.config.default_question_id.as_deref())?;
        info!(
            "Processing video {:?} for question {}",
            payload.video_id, question_id
        );

        let video = state
            .source
            .fetch(download_url)
            .await
            .map_err(|e| CallbackError::Fetch(e.to_string()))?;
        info!("Downloaded {} bytes from {}", video.len(), download_url);

        let key = object_key(&question_id);
        state
            .storage
            .put_object(&key, video, VIDEO_CONTENT_TYPE)
            .await
            .map_err(|e| CallbackError::Upload(e.to_string()))?;
        info!("Stored video at {}", key);

        let public_url = state.config.public_object_url(&key);

        if let Err(e) = state.questions.set_video_url(&question_id, &public_url).await {
            if state.config.rollback_on_db_failure {
                match state.storage.delete_object(&key).await {
                    Ok(()) => warn!("Removed {} after failed record update", key),
                    Err(delete_err) => error!("Failed to remove {}: {}", key, delete_err),
                }
            }
            return Err(CallbackError::Persistence(e.to_string()));
        }
        info!("Question {} now points to {}", question_id, public_url);

        Ok(CallbackResponse {
            success: true,
            public_url,
        })
    }
}

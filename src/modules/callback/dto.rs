use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Job status reported by the generation service once the video is ready.
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallbackPayload {
    pub video_id: Option<String>,
    pub download_url: Option<String>,
    pub status: Option<String>,
    pub metadata: Option<CallbackMetadata>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallbackMetadata {
    pub question_id: Option<String>,
}

impl CallbackPayload {
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }

    /// The download URL, if present and non-blank.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// The question named in the metadata. Only an empty string counts as
    /// absent; the value is otherwise used verbatim.
    pub fn question_id(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.question_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
    pub success: bool,
    pub public_url: String,
}

use axum::http::StatusCode;
use crate::common::response::ApiError;

/// Everything that can stop a callback from being processed.
#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Video not ready")]
    NotReady,
    #[error("{0}")]
    InvalidPayload(String),
    #[error("Missing questionId")]
    MissingQuestionId,
    #[error("{0}")]
    Fetch(String),
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Database update failed: {0}")]
    Persistence(String),
}

impl CallbackError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CallbackError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CallbackError::NotReady
            | CallbackError::InvalidPayload(_)
            | CallbackError::MissingQuestionId => StatusCode::BAD_REQUEST,
            CallbackError::Fetch(_)
            | CallbackError::Upload(_)
            | CallbackError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CallbackError::MethodNotAllowed => "method_not_allowed",
            CallbackError::NotReady => "not_ready",
            CallbackError::InvalidPayload(_) => "invalid_payload",
            CallbackError::MissingQuestionId => "missing_question_id",
            CallbackError::Fetch(_) => "fetch",
            CallbackError::Upload(_) => "upload",
            CallbackError::Persistence(_) => "persistence",
        }
    }
}

impl From<CallbackError> for ApiError {
    fn from(err: CallbackError) -> Self {
        match err {
            CallbackError::MethodNotAllowed => ApiError::plain(err.to_string(), err.status_code()),
            _ => ApiError::tagged(err.to_string(), err.status_code(), err.kind()),
        }
    }
}

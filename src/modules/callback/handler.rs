use super::dto::{CallbackPayload, CallbackResponse};
use super::error::CallbackError;
use super::service::CallbackService;
use crate::common::response::{ApiError, ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::error;

/// Video generation completion callback
///
/// Downloads the finished video, stores it under `questions/{questionId}.mp4`
/// and links its public URL to the question record.
#[utoipa::path(
    post,
    path = "/api/colossyan-callback",
    request_body = CallbackPayload,
    responses(
        (status = 200, description = "Video stored and linked", body = CallbackResponse),
        (status = 400, description = "Video not ready or malformed payload", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = String),
        (status = 500, description = "Fetch, upload or database update failed", body = ErrorBody)
    ),
    tag = "Callback"
)]
pub async fn receive_callback(
    State(state): State<AppState>,
    payload: Result<Json<CallbackPayload>, JsonRejection>,
) -> Result<ApiSuccess<CallbackResponse>, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| CallbackError::InvalidPayload(rejection.body_text()))?;

    match CallbackService::process(&state, payload).await {
        Ok(res) => Ok(ApiSuccess(res, StatusCode::OK)),
        Err(e) => {
            if e.status_code().is_server_error() {
                error!("❌ Callback failed: {}", e);
            }
            Err(e.into())
        }
    }
}

pub async fn method_not_allowed() -> ApiError {
    CallbackError::MethodNotAllowed.into()
}

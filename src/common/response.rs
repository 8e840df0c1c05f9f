use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

pub struct ApiSuccess<T>(pub T, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let (body, status) = (self.0, self.1);
        (status, Json(body)).into_response()
    }
}

/// Error response. Tagged errors render as `{ "error", "kind" }` JSON,
/// plain ones as a bare text body.
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
    pub kind: Option<&'static str>,
    pub plain: bool,
}

impl ApiError {
    pub fn tagged(message: String, status: StatusCode, kind: &'static str) -> Self {
        Self { message, status, kind: Some(kind), plain: false }
    }

    pub fn plain(message: String, status: StatusCode) -> Self {
        Self { message, status, kind: None, plain: true }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.plain {
            return (self.status, self.message).into_response();
        }

        let body = ErrorBody {
            error: self.message,
            kind: self.kind.map(str::to_string),
        };
        (self.status, Json(body)).into_response()
    }
}

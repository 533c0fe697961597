use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure of a request handler.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown resource or filter. Responds `404` with an empty array.
    NotFound,

    /// Malformed request parameter
    BadRequest(String),

    /// Store or schema failure
    Internal(cascade::Error),
}

impl From<cascade::Error> for ApiError {
    fn from(err: cascade::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, Json(json!([]))).into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

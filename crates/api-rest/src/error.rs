//! Mapping from core errors to HTTP responses.

use api_shared::ErrorRes;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use filedrop_core::CoreError;

pub const MISSING_FILE_MESSAGE: &str = "No file provided";
pub const INVALID_FILENAME_MESSAGE: &str = "Invalid filename";
pub const NOT_FOUND_MESSAGE: &str = "File not found";

/// Error returned by REST handlers.
///
/// - `MissingFile` and `InvalidFileName` → 400 with a JSON `{"error": ...}` body
/// - `NotFound` → 404 with a plain-text description
/// - a non-UTF-8 path segment in a fetch → 404, like any other name that cannot be stored
/// - multipart transport failures → the status the multipart parser assigns
/// - anything else → 500, logged
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    #[error("Storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(CoreError::MissingFile) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorRes::new(MISSING_FILE_MESSAGE)),
            )
                .into_response(),
            ApiError::Core(CoreError::InvalidFileName(reason)) => {
                tracing::warn!("Rejected upload filename: {}", reason);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorRes::new(INVALID_FILENAME_MESSAGE)),
                )
                    .into_response()
            }
            ApiError::Core(CoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
            ApiError::Core(e @ (CoreError::InvalidInput(_) | CoreError::Storage(_))) => {
                tracing::error!("Storage error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
            ApiError::Join(e) => {
                tracing::error!("Upload task failed: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
            ApiError::Multipart(e) => {
                tracing::warn!("Multipart error: {}", e);
                (e.status(), e.body_text()).into_response()
            }
        }
    }
}

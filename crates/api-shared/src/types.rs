//! JSON bodies exchanged over the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Multipart form accepted by `POST /upload`.
///
/// Only used to describe the request in the OpenAPI document; the handler reads the multipart
/// stream directly.
#[derive(Debug, ToSchema)]
pub struct UploadReq {
    /// File part; its filename becomes the storage name
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadRes {
    pub message: String,
    pub filename: String,
}

impl UploadRes {
    pub fn success(filename: impl Into<String>) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.into(),
            filename: filename.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

//! # API REST
//!
//! REST API implementation for filedrop.
//!
//! Handles:
//! - HTTP endpoints with axum (upload, fetch, health)
//! - OpenAPI documentation served as JSON
//! - REST-specific concerns (multipart parsing, JSON bodies, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `filedrop-core` for storage semantics.

#![warn(rust_2018_idioms)]

mod error;
mod routes;

pub use error::{ApiError, INVALID_FILENAME_MESSAGE, MISSING_FILE_MESSAGE, NOT_FOUND_MESSAGE};
pub use routes::{router, ApiDoc, AppState};

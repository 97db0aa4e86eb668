//! # filedrop Core
//!
//! Core logic for the filedrop upload service:
//! - Startup configuration ([`CoreConfig`])
//! - Upload and fetch semantics over the Storage Directory ([`UploadService`])
//! - The error taxonomy surfaced to API layers ([`CoreError`])
//!
//! **No API concerns**: HTTP routing, multipart parsing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
mod error;
mod upload;

pub use config::CoreConfig;
pub use constants::{
    DEFAULT_LISTEN_ADDR, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_STORAGE_DIR_NAME, UPLOAD_FIELD_NAME,
};
pub use error::{CoreError, CoreResult};
pub use filedrop_files::{FileMetadata, FileName, FilesError};
pub use upload::{UploadService, UploadedFile};

//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Request
//! handlers never read process-wide environment variables, which keeps behaviour consistent in
//! multi-threaded runtimes and test harnesses.

use crate::constants::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_STORAGE_DIR_NAME};
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    storage_dir: PathBuf,
    max_upload_bytes: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// No filesystem access happens here; the storage directory is created by
    /// [`crate::UploadService::new`].
    pub fn new(storage_dir: PathBuf, max_upload_bytes: usize) -> CoreResult<Self> {
        if storage_dir.as_os_str().is_empty() {
            return Err(CoreError::InvalidInput(
                "storage_dir cannot be empty".into(),
            ));
        }
        if max_upload_bytes == 0 {
            return Err(CoreError::InvalidInput(
                "max_upload_bytes must be greater than zero".into(),
            ));
        }

        Ok(Self {
            storage_dir,
            max_upload_bytes,
        })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}

/// Resolve the storage directory from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `uploads` relative to the working directory.
pub fn storage_dir_from_env_value(value: Option<String>) -> PathBuf {
    value
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR_NAME))
}

/// Parse the upload body limit from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default limit.
pub fn max_upload_bytes_from_env_value(value: Option<String>) -> CoreResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_MAX_UPLOAD_BYTES),
        Some(v) => {
            let parsed = v.parse::<usize>().map_err(|e| {
                CoreError::InvalidInput(format!("invalid upload byte limit {v:?}: {e}"))
            })?;
            if parsed == 0 {
                return Err(CoreError::InvalidInput(
                    "upload byte limit must be greater than zero".into(),
                ));
            }
            Ok(parsed)
        }
    }
}

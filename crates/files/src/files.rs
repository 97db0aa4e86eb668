//! Storage Directory service implementation
//!
//! This module provides [`FilesService`], the only component that touches the Storage Directory
//! on disk. Everything above it (the upload service, the HTTP layer) works in terms of
//! [`FileName`] values and never builds filesystem paths itself.
//!
//! # Storage Layout
//!
//! ```text
//! <storage_root>/          # created once by FilesService::initialise
//! ├── <name>               # flat names land directly under the root
//! └── <dir>/<name>         # nested names create their parent directories on write
//! ```
//!
//! # Semantics
//!
//! - Writes buffer the whole payload and issue a single `fs::write`; there is no temp-file and
//!   rename step, so a concurrent reader may observe a partially written file
//! - Re-writing a name replaces its content (last write wins)
//! - Lookups only succeed for regular files; directories are reported as not found
//! - Nothing is locked and nothing is deleted

use crate::{FileName, FilesError};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata for a stored file, taken from the filesystem after a write or lookup.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct FileMetadata {
    /// Name the file is stored under, relative to the storage root
    pub name: FileName,

    /// Size of the file in bytes
    pub size_bytes: u64,

    /// Last modification time reported by the OS
    pub modified_at: DateTime<Utc>,
}

/// Service for reading and writing files in the Storage Directory
///
/// Construct it once at startup with [`FilesService::initialise`] and share it; every operation
/// takes `&self` and holds no in-memory state beyond the canonical root path.
#[derive(Debug)]
pub struct FilesService {
    /// Canonicalised storage root
    root_directory: PathBuf,
}

impl FilesService {
    /// Creates the storage root if needed and returns a service bound to it
    ///
    /// # Arguments
    ///
    /// * `root_directory` - Storage Directory path, absolute or relative to the working directory
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidStorageDirectory` if:
    /// - the path exists but is not a directory
    /// - the directory cannot be created
    /// - path canonicalisation fails
    pub fn initialise(root_directory: &Path) -> Result<Self, FilesError> {
        if root_directory.exists() && !root_directory.is_dir() {
            return Err(FilesError::InvalidStorageDirectory(format!(
                "Path is not a directory: {}",
                root_directory.display()
            )));
        }

        fs::create_dir_all(root_directory).map_err(|e| {
            FilesError::InvalidStorageDirectory(format!(
                "Cannot create directory {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        let root_directory = root_directory.canonicalize().map_err(|e| {
            FilesError::InvalidStorageDirectory(format!(
                "Cannot canonicalize path {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        tracing::debug!("storage directory ready at {}", root_directory.display());

        Ok(Self { root_directory })
    }

    /// Writes `contents` under `name`, replacing any existing file
    ///
    /// Parent directories of nested names are created as needed.
    ///
    /// # Returns
    ///
    /// `FileMetadata` read back from the filesystem after the write.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::Io` if a parent directory cannot be created or the write fails.
    pub fn write(&self, name: &FileName, contents: &[u8]) -> Result<FileMetadata, FilesError> {
        let storage_path = self.storage_path(name);

        if let Some(parent) = storage_path.parent() {
            if parent != self.root_directory {
                fs::create_dir_all(parent).map_err(|e| {
                    FilesError::Io(std::io::Error::new(
                        e.kind(),
                        format!(
                            "Failed to create storage directory {}: {}",
                            parent.display(),
                            e
                        ),
                    ))
                })?;
            }
        }

        fs::write(&storage_path, contents).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write file to {}: {}", storage_path.display(), e),
            ))
        })?;

        self.metadata(name)
    }

    /// Resolves `name` to the absolute path of an existing stored file
    ///
    /// # Errors
    ///
    /// Returns `FilesError::NotFound` if nothing, or something other than a regular file, is
    /// stored under `name`.
    pub fn locate(&self, name: &FileName) -> Result<PathBuf, FilesError> {
        let storage_path = self.storage_path(name);
        if !storage_path.is_file() {
            return Err(FilesError::NotFound(name.to_string()));
        }
        Ok(storage_path)
    }

    /// Returns filesystem metadata for the file stored under `name`
    ///
    /// # Errors
    ///
    /// Returns `FilesError::NotFound` if the file is absent, or `FilesError::Io` if its metadata
    /// cannot be read.
    pub fn metadata(&self, name: &FileName) -> Result<FileMetadata, FilesError> {
        let storage_path = self.locate(name)?;
        let meta = fs::metadata(&storage_path)?;
        let modified_at = meta.modified().map(DateTime::<Utc>::from)?;

        Ok(FileMetadata {
            name: name.clone(),
            size_bytes: meta.len(),
            modified_at,
        })
    }

    /// Returns the canonicalised storage root
    #[must_use]
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    fn storage_path(&self, name: &FileName) -> PathBuf {
        self.root_directory.join(name.as_path())
    }
}

//! filedrop file storage
//!
//! This crate owns the Storage Directory: the single local directory that every upload is written
//! into and every fetch is served from.
//!
//! ## Storage Model
//!
//! - A stored file is identified solely by its client-supplied name
//! - The name is used as a relative path below the storage root, so nested names are allowed
//! - Writing an existing name overwrites it (last write wins, no versioning)
//! - Nothing is ever deleted, and no index exists beyond the directory listing itself
//!
//! ```text
//! uploads/
//! ├── report.txt
//! └── models/
//!     └── bracket.stl
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use filedrop_files::{FileName, FilesService};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = FilesService::initialise(Path::new("uploads"))?;
//! let name = FileName::parse("report.txt")?;
//! let metadata = service.write(&name, b"hello")?;
//! assert_eq!(metadata.size_bytes, 5);
//! assert!(service.locate(&name)?.ends_with("report.txt"));
//! # Ok(())
//! # }
//! ```

mod constants;
mod filename;
mod files;

pub use constants::DEFAULT_STORAGE_DIR_NAME;
pub use filename::FileName;
pub use files::{FileMetadata, FilesService};

/// Errors that can occur during file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Storage root could not be created or is not a directory
    #[error("Invalid storage directory: {0}")]
    InvalidStorageDirectory(String),

    /// Name cannot be used as a path inside the storage directory
    #[error("Invalid filename: {0}")]
    InvalidFileName(String),

    /// No regular file is stored under the requested name
    #[error("File not found: {0}")]
    NotFound(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Upload and fetch operations over the Storage Directory.

use crate::{CoreConfig, CoreError, CoreResult};
use filedrop_files::{FileMetadata, FileName, FilesError, FilesService};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A file part taken from an upload request.
///
/// `filename` is whatever the client sent; it is validated by [`UploadService::upload`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub contents: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: Some(filename.into()),
            contents: contents.into(),
        }
    }
}

/// Upload and fetch semantics on top of [`FilesService`].
///
/// Cheap to clone; clones share the same storage root.
#[derive(Clone, Debug)]
pub struct UploadService {
    files: Arc<FilesService>,
}

impl UploadService {
    /// Initialise the storage directory named by `cfg` and return a service bound to it.
    ///
    /// Creates the directory if it does not exist. Intended to be called once at startup.
    pub fn new(cfg: &CoreConfig) -> CoreResult<Self> {
        let files = FilesService::initialise(cfg.storage_dir())?;
        Ok(Self::with_files(files))
    }

    pub fn with_files(files: FilesService) -> Self {
        Self {
            files: Arc::new(files),
        }
    }

    pub fn storage_dir(&self) -> &Path {
        self.files.root_directory()
    }

    /// Store an uploaded file under its client-supplied name.
    ///
    /// A missing part, or a part with no filename, is `MissingFile`. Existing content under the
    /// same name is overwritten.
    ///
    /// # Errors
    /// - `CoreError::MissingFile` if no usable file part was supplied
    /// - `CoreError::InvalidFileName` if the name would escape the storage directory
    /// - `CoreError::Storage` if the write fails
    pub fn upload(&self, file: Option<UploadedFile>) -> CoreResult<FileMetadata> {
        let file = file.ok_or(CoreError::MissingFile)?;
        let raw_name = match file.filename.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(CoreError::MissingFile),
        };

        let name = FileName::parse(raw_name)?;
        let metadata = self.files.write(&name, &file.contents)?;

        tracing::info!(
            filename = %metadata.name,
            size_bytes = metadata.size_bytes,
            "file stored"
        );

        Ok(metadata)
    }

    /// Resolve a requested filename to the path of the stored file.
    ///
    /// Names that are not valid storage names cannot exist in the storage directory and are
    /// reported as `NotFound`.
    pub fn locate(&self, filename: &str) -> CoreResult<PathBuf> {
        let name = parse_lookup_name(filename)?;
        Ok(self.files.locate(&name)?)
    }
}

fn parse_lookup_name(filename: &str) -> CoreResult<FileName> {
    FileName::parse(filename).map_err(|e| match e {
        FilesError::InvalidFileName(_) => CoreError::NotFound(filename.to_string()),
        other => other.into(),
    })
}

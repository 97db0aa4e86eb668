use filedrop_files::FilesError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("No file provided")]
    MissingFile,
    #[error("Invalid filename: {0}")]
    InvalidFileName(String),
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(#[source] FilesError),
}

impl From<FilesError> for CoreError {
    fn from(err: FilesError) -> Self {
        match err {
            FilesError::InvalidFileName(reason) => CoreError::InvalidFileName(reason),
            FilesError::NotFound(name) => CoreError::NotFound(name),
            other => CoreError::Storage(other),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

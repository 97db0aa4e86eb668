pub use filedrop_files::DEFAULT_STORAGE_DIR_NAME;

/// Address the service listens on when none is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Upload request body limit when none is configured (100 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Multipart field that carries the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

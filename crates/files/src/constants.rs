/// Directory name used for the storage root when none is configured.
pub const DEFAULT_STORAGE_DIR_NAME: &str = "uploads";

//! Validated names for stored files.

use crate::FilesError;
use std::path::{Component, Path};

/// A client-supplied filename that is safe to join onto the storage root.
///
/// The name is kept verbatim (no trimming, no case folding). Nested names such as
/// `models/bracket.stl` are accepted. Names that could escape the storage root are rejected:
/// absolute paths, `..` components, platform prefixes, and embedded NUL bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validates `input` as a storage-relative filename.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidFileName` if the name is empty, names a directory, contains a
    /// NUL byte, or has a component that is not a plain path segment.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, FilesError> {
        let raw = input.as_ref();

        if raw.is_empty() {
            return Err(FilesError::InvalidFileName("filename is empty".into()));
        }
        if raw.contains('\0') {
            return Err(FilesError::InvalidFileName(
                "filename contains a NUL byte".into(),
            ));
        }
        if raw.ends_with('/') {
            return Err(FilesError::InvalidFileName(format!(
                "filename names a directory: {raw}"
            )));
        }

        let mut has_segment = false;
        for component in Path::new(raw).components() {
            match component {
                Component::Normal(_) => has_segment = true,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(FilesError::InvalidFileName(format!(
                        "filename escapes the storage directory: {raw}"
                    )));
                }
            }
        }

        if !has_segment {
            return Err(FilesError::InvalidFileName(format!(
                "filename has no file segment: {raw}"
            )));
        }

        Ok(Self(raw.to_owned()))
    }

    /// Returns the name exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as a relative path.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for FileName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for FileName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FileName::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_kept_verbatim() {
        let name = FileName::parse(" report v2.txt").unwrap();
        assert_eq!(name.as_str(), " report v2.txt");
    }

    #[test]
    fn test_nested_name_is_accepted() {
        let name = FileName::parse("models/bracket.stl").unwrap();
        assert_eq!(name.as_path(), Path::new("models/bracket.stl"));
    }

    #[test]
    fn test_current_dir_prefix_is_accepted() {
        assert!(FileName::parse("./report.txt").is_ok());
    }

    #[test]
    fn test_rejects_unsafe_names() {
        for raw in [
            "",
            "/etc/passwd",
            "../secret.txt",
            "models/../../secret.txt",
            "..",
            ".",
            "models/",
            "bad\0name",
        ] {
            assert!(
                matches!(FileName::parse(raw), Err(FilesError::InvalidFileName(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_dots_inside_segment_are_not_traversal() {
        assert!(FileName::parse("archive..tar.gz").is_ok());
        assert!(FileName::parse("..hidden").is_ok());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let name: FileName = serde_json::from_str("\"a/b.txt\"").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"a/b.txt\"");

        let bad: Result<FileName, _> = serde_json::from_str("\"../b.txt\"");
        assert!(bad.is_err());
    }
}

//! Error type for config lookups.
//!
//! A missing key is deliberately *not* an error: it is the normal
//! `ConfigValue::Absent` outcome.  Every variant here means the file itself
//! could not be used.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why `config.json` could not produce a value.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The current working directory could not be determined.
    #[error("could not determine the current working directory: {0}")]
    WorkingDir(#[source] io::Error),

    /// No file exists at the resolved path.
    #[error("config file not found at {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but could not be read (permissions, I/O, a directory, ...).
    #[error("I/O error reading config at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not valid JSON.
    #[error("failed to parse config JSON at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is valid JSON but its root is not an object.
    #[error("config root at {path} is a JSON {found}, expected an object")]
    NotAnObject { path: PathBuf, found: &'static str },
}

impl LookupError {
    /// Classifies an I/O failure on `path` as [`LookupError::NotFound`] or
    /// [`LookupError::Unreadable`].
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path, source }
        } else {
            Self::Unreadable { path, source }
        }
    }

    /// The config path involved, if the failure happened after it was resolved.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::WorkingDir(_) => None,
            Self::NotFound { path, .. }
            | Self::Unreadable { path, .. }
            | Self::Malformed { path, .. }
            | Self::NotAnObject { path, .. } => Some(path),
        }
    }

    /// Returns `true` when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found_maps_to_not_found() {
        // Arrange
        let source = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");

        // Act
        let err = LookupError::from_io(PathBuf::from("/tmp/config.json"), source);

        // Assert
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(Path::new("/tmp/config.json")));
    }

    #[test]
    fn test_from_io_permission_denied_maps_to_unreadable() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let err = LookupError::from_io(PathBuf::from("config.json"), source);

        assert!(matches!(err, LookupError::Unreadable { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display_includes_underlying_message() {
        let source = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = LookupError::from_io(PathBuf::from("/srv/app/config.json"), source);

        let text = err.to_string();
        assert!(text.contains("/srv/app/config.json"), "got: {text}");
        assert!(text.contains("No such file or directory"), "got: {text}");
    }

    #[test]
    fn test_malformed_display_includes_parser_message() {
        // Arrange
        let source = serde_json::from_str::<serde_json::Value>(r#"{"a":"#)
            .expect_err("truncated JSON must fail");

        // Act
        let err = LookupError::Malformed {
            path: PathBuf::from("config.json"),
            source,
        };

        // Assert
        let text = err.to_string();
        assert!(text.starts_with("failed to parse config JSON"), "got: {text}");
        assert!(text.contains("EOF"), "got: {text}");
    }

    #[test]
    fn test_not_an_object_display_names_found_type() {
        let err = LookupError::NotAnObject {
            path: PathBuf::from("config.json"),
            found: "array",
        };
        assert_eq!(
            err.to_string(),
            "config root at config.json is a JSON array, expected an object"
        );
    }

    #[test]
    fn test_working_dir_error_has_no_path() {
        let err = LookupError::WorkingDir(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.path().is_none());
        assert!(err.to_string().contains("working directory"));
    }
}

//! Error handling module for toolbox
//!
//! Provides the library error type using thiserror. The binary wraps these
//! with `anyhow` context before reporting them.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for toolbox
#[derive(Error, Debug)]
pub enum ToolboxError {
    /// Catalog file is missing or unreadable
    #[error("Failed to read package catalog {path:?}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog content is not JSON or does not have the catalog shape
    #[error("Failed to parse package catalog {origin}: {source}")]
    CatalogParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Selection file is missing or unreadable
    #[error("Failed to read selection {path:?}: {source}")]
    SelectionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Selection content is not a JSON array of strings
    #[error("Failed to parse selection {path:?}: {source}")]
    SelectionParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Selection could not be written
    #[error("Failed to write selection {path:?}: {source}")]
    SelectionWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for toolbox operations
pub type Result<T> = std::result::Result<T, ToolboxError>;

// Convenient error constructors
impl ToolboxError {
    pub(crate) fn catalog_read(path: &Path, source: std::io::Error) -> Self {
        Self::CatalogRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn catalog_parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::CatalogParse {
            origin: origin.into(),
            source,
        }
    }

    pub(crate) fn selection_read(path: &Path, source: std::io::Error) -> Self {
        Self::SelectionRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn selection_parse(path: &Path, source: serde_json::Error) -> Self {
        Self::SelectionParse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn selection_write(path: &Path, source: std::io::Error) -> Self {
        Self::SelectionWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ToolboxError::catalog_read(Path::new("pkgs.json"), io_err);
        assert_eq!(
            err.to_string(),
            "Failed to read package catalog \"pkgs.json\": file not found"
        );
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = ToolboxError::selection_parse(Path::new("sel.json"), json_err);
        assert!(matches!(err, ToolboxError::SelectionParse { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_constructors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ToolboxError::selection_write(Path::new("/root/out.json"), io_err);
        assert!(matches!(err, ToolboxError::SelectionWrite { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ToolboxError::selection_read(Path::new("in.json"), io_err);
        assert!(matches!(err, ToolboxError::SelectionRead { .. }));
    }
}

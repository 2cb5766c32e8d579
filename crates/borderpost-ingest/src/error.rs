//! Error types for source document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort ingestion of a source document.
///
/// Problems with individual checkpoints are not errors; they are counted in
/// the ingest report and the batch continues.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === JSON Errors ===
    /// The file is not well-formed JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value has the wrong shape.
    #[error("unexpected top-level JSON in {path}: expected {expected}")]
    UnexpectedShape {
        path: PathBuf,
        expected: &'static str,
    },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/borders.json"),
        };
        assert_eq!(err.to_string(), "input file not found: /path/to/borders.json");
    }

    #[test]
    fn test_not_found_is_classified() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            IngestError::read("x.json", io),
            IngestError::FileNotFound { .. }
        ));
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(
            IngestError::read("x.json", io),
            IngestError::FileRead { .. }
        ));
    }

    #[test]
    fn test_shape_error_display() {
        let err = IngestError::UnexpectedShape {
            path: PathBuf::from("points.json"),
            expected: "an array",
        };
        assert_eq!(
            err.to_string(),
            "unexpected top-level JSON in points.json: expected an array"
        );
    }
}

//! JSON document reading.

use std::path::Path;

use serde_json::Value;

use crate::error::{IngestError, Result};

/// Read and parse a UTF-8 JSON document.
pub fn read_json_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    // Tolerate a UTF-8 byte order mark left by some editors.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    serde_json::from_str(text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON document whose top level must be an array.
pub fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    match read_json_document(path)? {
        Value::Array(items) => Ok(items),
        _ => Err(IngestError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "an array",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "\u{feff}{\"a\": [1, 2]}").unwrap();

        let value = read_json_document(&path).unwrap();
        assert_eq!(value["a"][1], 2);
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"federal_districts\": ").unwrap();

        let err = read_json_document(&path).unwrap_err();
        assert!(matches!(err, IngestError::JsonParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_json_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_array_required() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, "{}").unwrap();
        assert!(matches!(
            read_json_array(&path).unwrap_err(),
            IngestError::UnexpectedShape { .. }
        ));

        fs::write(&path, "[{\"latitude\": 1}]").unwrap();
        assert_eq!(read_json_array(&path).unwrap().len(), 1);
    }
}

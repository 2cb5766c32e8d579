//! Structural GeoJSON validation.
//!
//! Checks the document `type`, and for collections every feature's `type`,
//! `geometry` and `properties`. Findings accumulate: one pass reports every
//! violation instead of stopping at the first. Unreadable files and invalid
//! JSON are findings as well, so validation itself never fails.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use borderpost_validate::validate_file;
//!
//! let report = validate_file(Path::new("borders.geojson"));
//! for issue in &report.issues {
//!     println!("{} {}", issue.severity().label(), issue.message());
//! }
//! ```

pub mod checks;
pub mod issue;
pub mod report;

use std::path::Path;

use borderpost_ingest::{IngestError, read_json_document};
use serde_json::Value;

pub use checks::document::VALID_TYPES;
pub use issue::{Issue, Severity};
pub use report::ValidationReport;

/// Validate a parsed document.
pub fn validate_document(document: &Value) -> ValidationReport {
    let (issues, feature_count) = checks::document::check(document);
    ValidationReport {
        path: None,
        feature_count,
        issues,
    }
}

/// Read and validate one file.
pub fn validate_file(path: &Path) -> ValidationReport {
    let _span = tracing::info_span!("validate", path = %path.display()).entered();

    let mut report = match read_json_document(path) {
        Ok(document) => validate_document(&document),
        Err(error) => {
            let issue = match &error {
                IngestError::JsonParse { source, .. } => Issue::InvalidJson {
                    reason: source.to_string(),
                },
                _ => Issue::Unreadable {
                    reason: error.to_string(),
                },
            };
            ValidationReport {
                issues: vec![issue],
                ..ValidationReport::default()
            }
        }
    };
    report.path = Some(path.to_path_buf());

    for issue in &report.issues {
        match issue.severity() {
            Severity::Error => tracing::debug!(code = issue.code(), "{}", issue.message()),
            Severity::Warning => tracing::warn!(code = issue.code(), "{}", issue.message()),
        }
    }
    tracing::info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        features = report.feature_count,
        "Validated document"
    );

    report
}

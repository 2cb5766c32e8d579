//! Validation results.

use std::path::PathBuf;

use serde::Serialize;

use crate::issue::{Issue, Severity};

/// Findings for one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Source file, when the document was read from disk.
    pub path: Option<PathBuf>,
    /// Number of features in a `FeatureCollection`.
    pub feature_count: Option<usize>,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// A document is valid when it has no error-level findings.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Findings of one severity, in discovery order.
    pub fn issues_with(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.severity() == severity)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues_with(severity).count()
    }
}

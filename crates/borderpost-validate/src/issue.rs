//! Validation issue types.
//!
//! The Issue enum provides type-safe finding creation where each variant
//! carries only its needed data.

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Document is structurally invalid
    Error,
    /// Should review
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    // File checks
    /// File could not be read
    Unreadable { reason: String },
    /// File is not valid JSON
    InvalidJson { reason: String },

    // Document checks
    /// Top-level `type` is absent
    MissingType,
    /// Top-level `type` is not a GeoJSON type
    InvalidType { found: String },
    /// `FeatureCollection` has no `features` array
    MissingFeatures,

    // Feature checks
    /// Feature entry is not an object
    FeatureNotObject { index: usize },
    /// Feature has no `type`
    FeatureMissingType { index: usize },
    /// Feature `type` is not `"Feature"`
    FeatureInvalidType { index: usize, found: String },
    /// Feature has no `geometry` member
    FeatureMissingGeometry { index: Option<usize> },
    /// Feature has no `properties` member
    FeatureMissingProperties { index: Option<usize> },
    /// Feature geometry is explicitly null
    NullGeometry { index: usize },

    // Geometry checks
    /// Geometry is neither an object nor null
    GeometryNotObject { index: usize },
    /// Geometry has no `type`
    GeometryMissingType { index: usize },
    /// Geometry has no `coordinates`
    GeometryMissingCoordinates { index: usize },
    /// Geometry `coordinates` is not an array
    CoordinatesNotArray { index: usize },
}

impl Issue {
    /// Short stable code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::Unreadable { .. } => "GJ001",
            Issue::InvalidJson { .. } => "GJ002",
            Issue::MissingType => "GJ010",
            Issue::InvalidType { .. } => "GJ011",
            Issue::MissingFeatures => "GJ012",
            Issue::FeatureNotObject { .. } => "GJ020",
            Issue::FeatureMissingType { .. } => "GJ021",
            Issue::FeatureInvalidType { .. } => "GJ022",
            Issue::FeatureMissingGeometry { .. } => "GJ023",
            Issue::FeatureMissingProperties { .. } => "GJ024",
            Issue::NullGeometry { .. } => "GJ025",
            Issue::GeometryNotObject { .. } => "GJ030",
            Issue::GeometryMissingType { .. } => "GJ031",
            Issue::GeometryMissingCoordinates { .. } => "GJ032",
            Issue::CoordinatesNotArray { .. } => "GJ033",
        }
    }

    /// Index of the offending feature inside a collection, if any.
    pub fn feature_index(&self) -> Option<usize> {
        match self {
            Issue::FeatureNotObject { index }
            | Issue::FeatureMissingType { index }
            | Issue::FeatureInvalidType { index, .. }
            | Issue::NullGeometry { index }
            | Issue::GeometryNotObject { index }
            | Issue::GeometryMissingType { index }
            | Issue::GeometryMissingCoordinates { index }
            | Issue::CoordinatesNotArray { index } => Some(*index),
            Issue::FeatureMissingGeometry { index } | Issue::FeatureMissingProperties { index } => {
                *index
            }
            Issue::Unreadable { .. }
            | Issue::InvalidJson { .. }
            | Issue::MissingType
            | Issue::InvalidType { .. }
            | Issue::MissingFeatures => None,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::NullGeometry { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::Unreadable { reason } => format!("Error reading file: {reason}"),
            Issue::InvalidJson { reason } => format!("Invalid JSON: {reason}"),
            Issue::MissingType => "Missing 'type' property".to_string(),
            Issue::InvalidType { found } => format!("Invalid type: {found}"),
            Issue::MissingFeatures => "FeatureCollection missing 'features' array".to_string(),
            Issue::FeatureNotObject { index } => format!("Feature {index} is not an object"),
            Issue::FeatureMissingType { index } => {
                format!("Feature {index} missing 'type' property")
            }
            Issue::FeatureInvalidType { index, found } => {
                format!("Feature {index} has invalid type: {found}")
            }
            Issue::FeatureMissingGeometry { index } => {
                format!("{} missing 'geometry' property", feature_label(*index))
            }
            Issue::FeatureMissingProperties { index } => {
                format!("{} missing 'properties' property", feature_label(*index))
            }
            Issue::NullGeometry { index } => format!("Feature {index} has null geometry"),
            Issue::GeometryNotObject { index } => {
                format!("Feature {index} geometry is not an object")
            }
            Issue::GeometryMissingType { index } => {
                format!("Feature {index} geometry missing 'type' property")
            }
            Issue::GeometryMissingCoordinates { index } => {
                format!("Feature {index} geometry missing 'coordinates' property")
            }
            Issue::CoordinatesNotArray { index } => {
                format!("Feature {index} geometry coordinates is not an array")
            }
        }
    }
}

fn feature_label(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("Feature {index}"),
        None => "Feature".to_string(),
    }
}

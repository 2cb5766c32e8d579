//! Output-related types for checkpoint export.

use std::path::PathBuf;

use borderpost_normalization::SetKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Point geometry with `[longitude, latitude]` coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

impl Geometry {
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self::Point {
            coordinates: [longitude, latitude],
        }
    }
}

/// A single GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// One file produced by a normalization run.
#[derive(Debug, Clone)]
pub struct WrittenArtifact {
    /// Flat list or country bucket.
    pub kind: SetKind,
    /// Path the records were written to.
    pub path: PathBuf,
    /// Number of records in the file.
    pub records: usize,
}

impl WrittenArtifact {
    /// Display label: `all` for the flat list, otherwise the group key.
    pub fn label(&self) -> &str {
        match &self.kind {
            SetKind::All => "all",
            SetKind::Group(key) => key,
        }
    }
}

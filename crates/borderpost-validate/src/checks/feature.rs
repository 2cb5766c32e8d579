//! Per-feature checks.
//!
//! A feature is checked for its `type`, its `geometry` (an object with a
//! `type` and an array of `coordinates`, or explicitly null) and the
//! presence of `properties`. Every violation is recorded; checking never
//! stops early.

use serde_json::{Map, Value};

use crate::checks::document::type_text;
use crate::issue::Issue;

/// Check the feature at `index` of a collection.
pub fn check_member(index: usize, item: &Value, issues: &mut Vec<Issue>) {
    let Some(feature) = item.as_object() else {
        issues.push(Issue::FeatureNotObject { index });
        return;
    };

    match feature.get("type") {
        None => issues.push(Issue::FeatureMissingType { index }),
        Some(Value::String(kind)) if kind == "Feature" => {}
        Some(other) => issues.push(Issue::FeatureInvalidType {
            index,
            found: type_text(other),
        }),
    }

    match feature.get("geometry") {
        None => issues.push(Issue::FeatureMissingGeometry { index: Some(index) }),
        Some(geometry) => check_geometry(index, geometry, issues),
    }

    if !feature.contains_key("properties") {
        issues.push(Issue::FeatureMissingProperties { index: Some(index) });
    }
}

/// Check a top-level `Feature` document for its required members.
pub fn check_bare(document: &Value, issues: &mut Vec<Issue>) {
    let has = |key: &str| document.as_object().is_some_and(|o| o.contains_key(key));
    if !has("geometry") {
        issues.push(Issue::FeatureMissingGeometry { index: None });
    }
    if !has("properties") {
        issues.push(Issue::FeatureMissingProperties { index: None });
    }
}

fn check_geometry(index: usize, geometry: &Value, issues: &mut Vec<Issue>) {
    let geometry: &Map<String, Value> = match geometry {
        Value::Null => {
            issues.push(Issue::NullGeometry { index });
            return;
        }
        Value::Object(geometry) => geometry,
        _ => {
            issues.push(Issue::GeometryNotObject { index });
            return;
        }
    };

    if !geometry.contains_key("type") {
        issues.push(Issue::GeometryMissingType { index });
    } else if let Some(coordinates) = geometry.get("coordinates") {
        if !coordinates.is_array() {
            issues.push(Issue::CoordinatesNotArray { index });
        }
    } else {
        issues.push(Issue::GeometryMissingCoordinates { index });
    }
}

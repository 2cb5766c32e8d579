//! Top-level document checks.
//!
//! Verifies the document `type` and dispatches into the feature checks for
//! collections and bare features.

use serde_json::Value;

use crate::checks::feature;
use crate::issue::Issue;

/// GeoJSON object types accepted at the top level.
pub const VALID_TYPES: &[&str] = &[
    "FeatureCollection",
    "Feature",
    "GeometryCollection",
    "Point",
    "LineString",
    "Polygon",
    "MultiPoint",
    "MultiLineString",
    "MultiPolygon",
];

/// Check a parsed document.
///
/// Returns the findings together with the number of features inspected
/// when the document is a collection.
pub fn check(document: &Value) -> (Vec<Issue>, Option<usize>) {
    let mut issues = Vec::new();

    let Some(kind) = document.get("type") else {
        issues.push(Issue::MissingType);
        return (issues, None);
    };

    if !kind.as_str().is_some_and(|k| VALID_TYPES.contains(&k)) {
        issues.push(Issue::InvalidType {
            found: type_text(kind),
        });
    }

    match kind.as_str() {
        Some("FeatureCollection") => {
            let Some(features) = document.get("features").and_then(Value::as_array) else {
                issues.push(Issue::MissingFeatures);
                return (issues, None);
            };
            for (index, item) in features.iter().enumerate() {
                feature::check_member(index, item, &mut issues);
            }
            (issues, Some(features.len()))
        }
        Some("Feature") => {
            feature::check_bare(document, &mut issues);
            (issues, None)
        }
        _ => (issues, None),
    }
}

/// Render a `type` value for messages: strings bare, anything else as JSON.
pub(crate) fn type_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geometry_types_are_valid_top_level() {
        for kind in ["Point", "MultiPolygon", "GeometryCollection"] {
            let (issues, count) = check(&json!({"type": kind}));
            assert!(issues.is_empty(), "{kind}: {issues:?}");
            assert_eq!(count, None);
        }
    }

    #[test]
    fn test_missing_and_invalid_type() {
        assert_eq!(check(&json!({"features": []})).0, vec![Issue::MissingType]);
        assert_eq!(check(&json!([1, 2])).0, vec![Issue::MissingType]);
        assert_eq!(
            check(&json!({"type": "Circle"})).0,
            vec![Issue::InvalidType {
                found: "Circle".to_string()
            }]
        );
        assert_eq!(
            check(&json!({"type": 5})).0,
            vec![Issue::InvalidType {
                found: "5".to_string()
            }]
        );
    }

    #[test]
    fn test_collection_without_features() {
        assert_eq!(
            check(&json!({"type": "FeatureCollection"})).0,
            vec![Issue::MissingFeatures]
        );
        assert_eq!(
            check(&json!({"type": "FeatureCollection", "features": {}})).0,
            vec![Issue::MissingFeatures]
        );
    }

    #[test]
    fn test_bare_feature_requires_members() {
        assert_eq!(
            check(&json!({"type": "Feature"})).0,
            vec![
                Issue::FeatureMissingGeometry { index: None },
                Issue::FeatureMissingProperties { index: None },
            ]
        );
        assert!(check(&json!({"type": "Feature", "geometry": null, "properties": {}})).0.is_empty());
    }
}

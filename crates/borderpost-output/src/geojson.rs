//! Geo-emission: flat property-bag records to a point `FeatureCollection`.
//!
//! Every input object becomes one `Feature` whose properties are all of its
//! members except `latitude` and `longitude`. Items whose coordinates cannot
//! be read as finite numbers are skipped and counted.

use borderpost_model::NormalizedCheckpoint;
use serde_json::{Map, Value};

use crate::types::{Feature, FeatureCollection, Geometry};

const LATITUDE_KEY: &str = "latitude";
const LONGITUDE_KEY: &str = "longitude";

/// Counts from one emission pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmissionReport {
    /// Input items considered.
    pub items: usize,
    /// Features emitted.
    pub features: usize,
    /// Items dropped for missing or non-numeric coordinates.
    pub skipped: usize,
}

/// Emitted collection plus its counts.
#[derive(Debug, Clone, Default)]
pub struct GeoEmission {
    pub collection: FeatureCollection,
    pub report: EmissionReport,
}

/// Read a coordinate from a JSON number or a numeric string.
///
/// Missing, null, boolean and non-finite values yield `None`.
pub fn coordinate_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Convert property-bag objects into point features, in input order.
pub fn emit_features(items: &[Value]) -> GeoEmission {
    let mut emission = GeoEmission::default();

    for (idx, item) in items.iter().enumerate() {
        emission.report.items += 1;
        let Some(object) = item.as_object() else {
            tracing::warn!(index = idx, "Skipping item that is not an object");
            emission.report.skipped += 1;
            continue;
        };

        let latitude = object.get(LATITUDE_KEY).and_then(coordinate_value);
        let longitude = object.get(LONGITUDE_KEY).and_then(coordinate_value);
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            let name = object
                .get("name")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("Unknown");
            tracing::warn!(
                index = idx,
                name,
                "Skipping item with invalid coordinates"
            );
            emission.report.skipped += 1;
            continue;
        };

        let properties: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| key.as_str() != LATITUDE_KEY && key.as_str() != LONGITUDE_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        emission.collection.features.push(Feature {
            geometry: Geometry::point(longitude, latitude),
            properties,
        });
        emission.report.features += 1;
    }

    tracing::info!(
        features = emission.report.features,
        skipped = emission.report.skipped,
        "Emitted GeoJSON features"
    );

    emission
}

/// Emit features for normalized records, using their serialized fields as
/// properties.
pub fn emit_records<'a, I>(records: I) -> serde_json::Result<GeoEmission>
where
    I: IntoIterator<Item = &'a NormalizedCheckpoint>,
{
    let items = records
        .into_iter()
        .map(serde_json::to_value)
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(emit_features(&items))
}

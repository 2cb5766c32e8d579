//! Re-transliteration of an existing GeoJSON feature collection.
//!
//! Hand-drawn map layers carry Cyrillic labels and a free-text description
//! such as `"МАПП Кордай<br>Статус: Многосторонний"`. This pass rewrites the
//! label properties in Latin script and derives a numeric `status` from the
//! description, leaving geometry untouched.

use borderpost_model::Alphabet;
use borderpost_translit::{Style, Transliterator};
use serde_json::{Map, Value};

use crate::status::extract_status_value;

/// Property keys treated as labels, in the order they are inspected.
pub const NAME_KEYS: &[&str] = &["name", "Name", "NAME", "title", "label"];

/// Property keys holding free-text descriptions, in fallback order.
pub const DESCRIPTION_KEYS: &[&str] = &["description", "desc"];

/// Counts from one re-transliteration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureUpdateReport {
    /// Features visited.
    pub features: usize,
    /// Label properties written.
    pub names_updated: usize,
    /// Features that received a `status` from their description.
    pub statuses_extracted: usize,
}

/// Rewrite labels and derive statuses for every feature of `document`.
///
/// Each non-blank string under a [`NAME_KEYS`] key is replaced by its
/// descriptive transliteration. A feature with no such label gets a new
/// `name` built from its first non-blank description. A missing or null
/// `properties` member becomes an empty object.
pub fn retransliterate_features(document: &mut Value, alphabet: Alphabet) -> FeatureUpdateReport {
    let engine = Transliterator::new(alphabet, Style::Descriptive);
    let mut report = FeatureUpdateReport::default();

    let Some(features) = document.get_mut("features").and_then(Value::as_array_mut) else {
        tracing::warn!("Document has no \"features\" array, nothing to update");
        return report;
    };

    for (idx, feature) in features.iter_mut().enumerate() {
        let Some(feature) = feature.as_object_mut() else {
            tracing::warn!(feature = idx, "Feature is not an object, skipping");
            continue;
        };
        report.features += 1;

        let properties = feature
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if properties.is_null() {
            *properties = Value::Object(Map::new());
        }
        let Some(properties) = properties.as_object_mut() else {
            tracing::warn!(feature = idx, "Feature properties are not an object, skipping");
            continue;
        };

        let renamed = update_names(properties, &engine);
        report.names_updated += renamed;
        if renamed == 0
            && let Some(description) = first_text(properties, DESCRIPTION_KEYS)
        {
            let name = engine.transliterate(&description);
            properties.insert("name".to_string(), Value::String(name));
            report.names_updated += 1;
        }

        let status = DESCRIPTION_KEYS
            .iter()
            .filter_map(|key| properties.get(*key))
            .find(|value| value.as_str().is_some_and(|s| !s.is_empty()))
            .and_then(extract_status_value);
        if let Some(status) = status {
            properties.insert("status".to_string(), Value::from(status.code()));
            report.statuses_extracted += 1;
        }
    }

    tracing::info!(
        features = report.features,
        names_updated = report.names_updated,
        statuses_extracted = report.statuses_extracted,
        "Re-transliterated features"
    );

    report
}

fn update_names(properties: &mut Map<String, Value>, engine: &Transliterator) -> usize {
    let mut updated = 0;
    for key in NAME_KEYS {
        if let Some(value) = properties.get_mut(*key)
            && let Some(text) = value.as_str()
            && !text.trim().is_empty()
        {
            *value = Value::String(engine.transliterate(text));
            updated += 1;
        }
    }
    updated
}

fn first_text(properties: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| properties.get(*key).and_then(Value::as_str))
        .find(|text| !text.trim().is_empty())
        .map(str::to_string)
}

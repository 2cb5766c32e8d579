//! Checkpoint JSON output generation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use borderpost_model::OutputConfig;
use borderpost_normalization::{OutputSet, SetKind};

use crate::common::{ensure_output_dir, geojson_sibling, group_file_name, write_json_pretty};
use crate::geojson::emit_records;
use crate::types::WrittenArtifact;

/// Path an output set is written to under `output_dir`.
pub fn artifact_path(output_dir: &Path, kind: &SetKind, config: &OutputConfig) -> PathBuf {
    match kind {
        SetKind::All => output_dir.join(&config.flat_file),
        SetKind::Group(key) => output_dir.join(group_file_name(&config.group_prefix, key)),
    }
}

/// Artifacts a run would produce, without touching the filesystem.
///
/// Group keys that sanitize to an already planned file name get a numeric
/// suffix (`checkpoints_A_B_2.json`), so every set keeps its own file.
pub fn plan_json_outputs(
    output_dir: &Path,
    sets: &[OutputSet<'_>],
    config: &OutputConfig,
) -> Vec<WrittenArtifact> {
    let mut taken: HashSet<PathBuf> = HashSet::with_capacity(sets.len());
    sets.iter()
        .map(|set| {
            let mut path = artifact_path(output_dir, &set.kind, config);
            if let SetKind::Group(key) = &set.kind {
                let mut suffix = 2;
                while taken.contains(&path) {
                    path = output_dir.join(group_file_name(
                        &config.group_prefix,
                        &format!("{key}_{suffix}"),
                    ));
                    suffix += 1;
                }
                if suffix > 2 {
                    tracing::warn!(
                        group = %key,
                        path = %path.display(),
                        "Group file name collides with another group, using a suffix"
                    );
                }
            }
            taken.insert(path.clone());
            WrittenArtifact {
                kind: set.kind.clone(),
                path,
                records: set.records.len(),
            }
        })
        .collect()
}

/// Write one JSON file per output set, flat list first.
///
/// With `config.geojson` set, the flat list is also written as a point
/// `FeatureCollection` beside the flat file.
pub fn write_json_outputs(
    output_dir: &Path,
    sets: &[OutputSet<'_>],
    config: &OutputConfig,
) -> Result<Vec<WrittenArtifact>> {
    let output_dir = ensure_output_dir(output_dir)?;

    let mut outputs = Vec::with_capacity(sets.len());
    for (set, artifact) in sets
        .iter()
        .zip(plan_json_outputs(&output_dir, sets, config))
    {
        write_json_pretty(&artifact.path, &set.records)
            .with_context(|| format!("failed to write {}", artifact.path.display()))?;
        tracing::info!(
            set = artifact.label(),
            records = artifact.records,
            path = %artifact.path.display(),
            "Wrote checkpoint file"
        );

        if config.geojson && set.kind == SetKind::All {
            let geo_path = geojson_sibling(&artifact.path);
            let emission = emit_records(set.records.iter().copied())
                .context("failed to convert checkpoints to GeoJSON")?;
            write_json_pretty(&geo_path, &emission.collection)
                .with_context(|| format!("failed to write {}", geo_path.display()))?;
            tracing::info!(
                features = emission.report.features,
                skipped = emission.report.skipped,
                path = %geo_path.display(),
                "Wrote GeoJSON file"
            );
        }

        outputs.push(artifact);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use borderpost_model::NormalizedCheckpoint;
    use borderpost_normalization::dispatch;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn record(id: i64, country: Option<&str>) -> NormalizedCheckpoint {
        NormalizedCheckpoint {
            name: Some(format!("Point {id}")),
            id: json!(id),
            country: country.map(str::to_string),
            latitude: json!("50.0"),
            longitude: json!("100.0"),
            ..NormalizedCheckpoint::default()
        }
    }

    fn read(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    fn ids(value: &Value) -> Vec<i64> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn test_write_json_outputs_files() {
        let dir = TempDir::new().unwrap();
        let records = vec![record(1, Some("CN")), record(2, None), record(3, Some("CN"))];
        let sets = dispatch(&records, "unknown");

        let outputs = write_json_outputs(dir.path(), &sets, &OutputConfig::default()).unwrap();

        let names: Vec<_> = outputs
            .iter()
            .map(|a| a.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["checkpoints.json", "checkpoints_CN.json", "checkpoints_unknown.json"]
        );
        assert_eq!(outputs[1].label(), "CN");
        assert_eq!(outputs[1].records, 2);

        let cn = read(&dir.path().join("checkpoints_CN.json"));
        assert_eq!(cn[0]["id"], 1);
        assert_eq!(cn[1]["id"], 3);
        assert_eq!(read(&dir.path().join("checkpoints.json")).as_array().unwrap().len(), 3);
        assert!(!dir.path().join("checkpoints.geojson").exists());
    }

    #[test]
    fn test_geojson_beside_flat_file() {
        let dir = TempDir::new().unwrap();
        let records = vec![record(1, Some("MN"))];
        let sets = dispatch(&records, "unknown");
        let config = OutputConfig {
            geojson: true,
            ..OutputConfig::default()
        };

        write_json_outputs(dir.path(), &sets, &config).unwrap();

        let geo = read(&dir.path().join("checkpoints.geojson"));
        assert_eq!(geo["type"], "FeatureCollection");
        assert_eq!(geo["features"][0]["geometry"]["coordinates"], json!([100.0, 50.0]));
        assert!(!dir.path().join("checkpoints_MN.geojson").exists());
    }

    #[test]
    fn test_colliding_group_keys_keep_separate_files() {
        let dir = TempDir::new().unwrap();
        let records = vec![record(1, Some("A/B")), record(2, Some("A_B"))];
        let sets = dispatch(&records, "unknown");

        let outputs = write_json_outputs(dir.path(), &sets, &OutputConfig::default()).unwrap();

        let names: Vec<_> = outputs
            .iter()
            .map(|a| a.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["checkpoints.json", "checkpoints_A_B.json", "checkpoints_A_B_2.json"]
        );
        assert_eq!(ids(&read(&dir.path().join("checkpoints_A_B.json"))), vec![1]);
        assert_eq!(ids(&read(&dir.path().join("checkpoints_A_B_2.json"))), vec![2]);
    }

    #[test]
    fn test_plan_does_not_write() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let records = vec![record(1, Some("KZ"))];
        let sets = dispatch(&records, "unknown");

        let planned = plan_json_outputs(&out, &sets, &OutputConfig::default());

        assert_eq!(planned.len(), 2);
        assert_eq!(planned[1].path, out.join("checkpoints_KZ.json"));
        assert!(!out.exists());
    }
}

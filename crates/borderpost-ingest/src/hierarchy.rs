//! Flattening of the `federal_districts → regions → checkpoints` hierarchy.

use std::path::Path;

use borderpost_model::RawCheckpoint;
use serde_json::Value;

use crate::error::{IngestError, Result};
use crate::reader::read_json_document;

/// Top-level key of the source document.
pub const DISTRICTS_KEY: &str = "federal_districts";

/// Key of the checkpoint list inside a region object.
pub const CHECKPOINTS_KEY: &str = "checkpoints";

/// Counts gathered while walking the source hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub districts: usize,
    pub regions: usize,
    /// Checkpoints read successfully.
    pub checkpoints: usize,
    /// Malformed entries (regions, checkpoint lists, checkpoints) that were skipped.
    pub skipped: usize,
}

/// Raw checkpoints in document order.
#[derive(Debug, Clone, Default)]
pub struct SourceCheckpoints {
    pub checkpoints: Vec<RawCheckpoint>,
    pub report: IngestReport,
}

/// Read the source document at `path` and flatten its checkpoints.
pub fn load_checkpoints(path: &Path) -> Result<SourceCheckpoints> {
    let document = read_json_document(path)?;
    if !document.is_object() {
        return Err(IngestError::UnexpectedShape {
            path: path.to_path_buf(),
            expected: "an object with a \"federal_districts\" mapping",
        });
    }
    let source = collect_checkpoints(&document);
    tracing::info!(
        path = %path.display(),
        districts = source.report.districts,
        regions = source.report.regions,
        checkpoints = source.report.checkpoints,
        skipped = source.report.skipped,
        "Loaded source checkpoints"
    );
    Ok(source)
}

/// Flatten every checkpoint of an already parsed source document.
///
/// Order is district order, then region order, then checkpoint order, as
/// they appear in the document. Malformed entries are logged and skipped.
pub fn collect_checkpoints(document: &Value) -> SourceCheckpoints {
    let mut source = SourceCheckpoints::default();

    let Some(districts) = document.get(DISTRICTS_KEY) else {
        tracing::warn!("Source document has no \"{DISTRICTS_KEY}\" mapping");
        return source;
    };
    let Some(districts) = districts.as_object() else {
        tracing::warn!("\"{DISTRICTS_KEY}\" is not a mapping, nothing to read");
        source.report.skipped += 1;
        return source;
    };

    for (district, regions) in districts {
        source.report.districts += 1;
        let Some(regions) = regions.as_array() else {
            tracing::warn!(district = %district, "Region list is not an array, skipping district");
            source.report.skipped += 1;
            continue;
        };
        for (region_idx, region) in regions.iter().enumerate() {
            collect_region(&mut source, district, region_idx, region);
        }
    }

    source
}

fn collect_region(source: &mut SourceCheckpoints, district: &str, region_idx: usize, region: &Value) {
    let Some(region) = region.as_object() else {
        tracing::warn!(district = %district, region = region_idx, "Region is not an object, skipping");
        source.report.skipped += 1;
        return;
    };
    source.report.regions += 1;

    let checkpoints = match region.get(CHECKPOINTS_KEY) {
        None | Some(Value::Null) => return,
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!(
                district = %district,
                region = region_idx,
                "Checkpoint list is not an array, skipping region"
            );
            source.report.skipped += 1;
            return;
        }
    };

    for (idx, item) in checkpoints.iter().enumerate() {
        match serde_json::from_value::<RawCheckpoint>(item.clone()) {
            Ok(checkpoint) => {
                source.report.checkpoints += 1;
                source.checkpoints.push(checkpoint);
            }
            Err(error) => {
                tracing::warn!(
                    district = %district,
                    region = region_idx,
                    checkpoint = idx,
                    error = %error,
                    "Malformed checkpoint, skipping"
                );
                source.report.skipped += 1;
            }
        }
    }
}

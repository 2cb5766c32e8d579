use std::path::PathBuf;

use borderpost_ingest::IngestReport;
use borderpost_normalization::{FeatureUpdateReport, NormalizeReport};
use borderpost_output::{EmissionReport, WrittenArtifact};

/// Outcome of a `normalize` run.
#[derive(Debug)]
pub struct NormalizeResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub ingest: IngestReport,
    pub normalize: NormalizeReport,
    /// Files written, or planned when `dry_run` is set.
    pub artifacts: Vec<WrittenArtifact>,
    pub geojson: Option<PathBuf>,
    pub dry_run: bool,
}

/// Outcome of a `geojson` run.
#[derive(Debug)]
pub struct GeojsonResult {
    pub output: PathBuf,
    pub report: EmissionReport,
}

/// Outcome of a `features` run.
#[derive(Debug)]
pub struct FeaturesResult {
    pub output: PathBuf,
    pub report: FeatureUpdateReport,
}

//! Pipeline stages behind the CLI commands.
//!
//! Each function runs one command end to end and returns a result struct
//! for the summary printer. Fatal problems (unreadable input, wrong
//! top-level shape, unwritable output) surface as `anyhow` errors; record
//! level problems are counted in the stage reports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use borderpost_ingest::{load_checkpoints, read_json_array, read_json_document};
use borderpost_model::{Alphabet, PipelineConfig};
use borderpost_normalization::{
    Normalizer, dispatch, execute_normalization, retransliterate_features,
};
use borderpost_output::{
    default_geojson_path, emit_features, geojson_sibling, plan_json_outputs, write_json_outputs,
    write_json_pretty,
};
use borderpost_validate::{ValidationReport, validate_file};
use tracing::{info, info_span};

use crate::types::{FeaturesResult, GeojsonResult, NormalizeResult};

/// Options for a `normalize` run after CLI flags are merged into the config.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub config: PipelineConfig,
    pub dry_run: bool,
}

/// Ingest, normalize, group and write one checkpoint export.
pub fn normalize(options: &NormalizeOptions) -> Result<NormalizeResult> {
    let span = info_span!("normalize", input = %options.input.display());
    let _guard = span.enter();

    let source = info_span!("ingest").in_scope(|| {
        load_checkpoints(&options.input)
            .with_context(|| format!("load checkpoints from {}", options.input.display()))
    })?;

    let normalizer = Normalizer::new(&options.config.normalize);
    info!(
        target_type = normalizer.target_type(),
        alphabet = options.config.normalize.alphabet.as_str(),
        "Normalizing checkpoints"
    );
    let batch = execute_normalization(&source.checkpoints, &normalizer);
    let sets = dispatch(&batch.records, &options.config.output.unknown_key);

    let (artifacts, geojson) = if options.dry_run {
        info!(sets = sets.len(), "Dry run, skipping output");
        let planned = plan_json_outputs(&options.output_dir, &sets, &options.config.output);
        (planned, None)
    } else {
        let written = info_span!("output", dir = %options.output_dir.display())
            .in_scope(|| write_json_outputs(&options.output_dir, &sets, &options.config.output))?;
        let geojson = options
            .config
            .output
            .geojson
            .then(|| written.first().map(|flat| geojson_sibling(&flat.path)))
            .flatten();
        (written, geojson)
    };

    Ok(NormalizeResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        ingest: source.report,
        normalize: batch.report,
        artifacts,
        geojson,
        dry_run: options.dry_run,
    })
}

/// Convert a flat JSON array of records into a point `FeatureCollection`.
pub fn geojson(input: &Path, output: Option<&Path>) -> Result<GeojsonResult> {
    let _guard = info_span!("geojson", input = %input.display()).entered();

    let items = read_json_array(input).with_context(|| format!("read {}", input.display()))?;
    info!(items = items.len(), "Read records");

    let emission = emit_features(&items);
    let output = output.map_or_else(|| default_geojson_path(input), Path::to_path_buf);
    write_json_pretty(&output, &emission.collection)?;

    Ok(GeojsonResult {
        output,
        report: emission.report,
    })
}

/// Default output of the `features` command: `<input stem>-transliterated.geojson`.
pub fn default_features_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "features".to_string());
    PathBuf::from(format!("{stem}-transliterated.geojson"))
}

/// Re-transliterate the labels of an existing GeoJSON layer.
pub fn features(input: &Path, output: Option<&Path>, alphabet: Alphabet) -> Result<FeaturesResult> {
    let _guard = info_span!("features", input = %input.display()).entered();

    let mut document =
        read_json_document(input).with_context(|| format!("read {}", input.display()))?;
    if !document.is_object() {
        bail!("{} is not a GeoJSON object", input.display());
    }

    let report = retransliterate_features(&mut document, alphabet);
    let output = output.map_or_else(|| default_features_path(input), Path::to_path_buf);
    write_json_pretty(&output, &document)?;

    Ok(FeaturesResult { output, report })
}

/// Validate every file; a failure in one file never stops the others.
pub fn validate(files: &[PathBuf]) -> Vec<ValidationReport> {
    files.iter().map(|path| validate_file(path)).collect()
}

use std::path::PathBuf;

use anyhow::Result;
use borderpost_cli::config::load_config;
use borderpost_cli::pipeline::{self, NormalizeOptions};
use borderpost_cli::types::{FeaturesResult, GeojsonResult, NormalizeResult};
use borderpost_translit::Transliterator;
use borderpost_validate::ValidationReport;

use crate::cli::{FeaturesArgs, GeojsonArgs, NormalizeArgs, TransliterateArgs, ValidateArgs};

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(alphabet) = args.alphabet {
        config.normalize.alphabet = alphabet.into();
    }
    if args.geojson {
        config.output.geojson = true;
    }
    let options = NormalizeOptions {
        input: args.input.clone(),
        output_dir: args.output_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        config,
        dry_run: args.dry_run,
    };
    pipeline::normalize(&options)
}

pub fn run_geojson(args: &GeojsonArgs) -> Result<GeojsonResult> {
    pipeline::geojson(&args.input, args.output.as_deref())
}

pub fn run_features(args: &FeaturesArgs) -> Result<FeaturesResult> {
    pipeline::features(&args.input, args.output.as_deref(), args.alphabet.into())
}

pub fn run_validate(args: &ValidateArgs) -> Vec<ValidationReport> {
    pipeline::validate(&args.files)
}

pub fn run_transliterate(args: &TransliterateArgs) -> String {
    Transliterator::new(args.alphabet.into(), args.style.into()).transliterate(&args.text)
}

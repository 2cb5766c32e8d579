//! CLI argument definitions for the checkpoint pipeline.

use std::path::PathBuf;

use borderpost_model::Alphabet;
use borderpost_translit::Style;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "borderpost",
    version,
    about = "Border checkpoint pipeline - Normalize and transliterate crossing points",
    long_about = "Normalize hierarchical border checkpoint exports into clean, \
                  transliterated records.\n\n\
                  Writes a flat checkpoint list plus one file per neighbouring country, \
                  emits GeoJSON point layers, and validates GeoJSON documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a checkpoint export and write grouped JSON files.
    Normalize(NormalizeArgs),

    /// Convert a flat JSON array of records into a GeoJSON point layer.
    Geojson(GeojsonArgs),

    /// Transliterate the labels of an existing GeoJSON layer.
    Features(FeaturesArgs),

    /// Check GeoJSON files for structural errors.
    Validate(ValidateArgs),

    /// Print the transliteration of a single string.
    Transliterate(TransliterateArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Checkpoint export with a top-level `federal_districts` mapping.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for generated files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Transliteration table for names (overrides the config file).
    #[arg(long = "alphabet", value_enum)]
    pub alphabet: Option<AlphabetArg>,

    /// Also write the flat list as GeoJSON.
    #[arg(long = "geojson")]
    pub geojson: bool,

    /// Report what would be written without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct GeojsonArgs {
    /// JSON array of records with `latitude` and `longitude`.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: <INPUT stem>.geojson).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// GeoJSON FeatureCollection with Cyrillic labels.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path (default: <INPUT stem>-transliterated.geojson).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Transliteration table for labels.
    #[arg(long = "alphabet", value_enum, default_value = "kazakh")]
    pub alphabet: AlphabetArg,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// GeoJSON files to check.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct TransliterateArgs {
    /// Text to transliterate.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output style.
    #[arg(long = "style", value_enum, default_value = "formal")]
    pub style: StyleArg,

    /// Transliteration table.
    #[arg(long = "alphabet", value_enum, default_value = "russian")]
    pub alphabet: AlphabetArg,
}

/// CLI transliteration table choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum AlphabetArg {
    Russian,
    Kazakh,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Russian => Alphabet::Russian,
            AlphabetArg::Kazakh => Alphabet::Kazakh,
        }
    }
}

/// CLI transliteration style choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Formal,
    Descriptive,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Formal => Style::Formal,
            StyleArg::Descriptive => Style::Descriptive,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

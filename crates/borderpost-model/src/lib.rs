//! Data model for border crossing checkpoint records.
//!
//! This crate provides the typed shapes that flow through the pipeline:
//! - **Raw records**: the leaf checkpoint entries of the source document
//! - **Normalized records**: transliterated, classified, admission-filtered output
//! - **Status codes**: the numeric bilateral/multilateral classification
//! - **Configuration**: TOML-loadable pipeline settings
//!
//! # Module Organization
//!
//! - [`checkpoint`]: `RawCheckpoint` and `NormalizedCheckpoint`
//! - [`status`]: `StatusCode`
//! - [`config`]: `PipelineConfig` and its sections

pub mod checkpoint;
pub mod config;
pub mod status;

pub use checkpoint::{
    Bilingual, ForeignCheckpoint, ForeignCountry, NormalizedCheckpoint, RawCheckpoint, Titled,
};
pub use config::{
    DEFAULT_TARGET_TYPE, NormalizeConfig, OutputConfig, PipelineConfig, UNKNOWN_GROUP_KEY,
};
pub use status::{InvalidStatusCode, StatusCode};

// Re-export so callers configuring the pipeline need a single import path.
pub use borderpost_translit::Alphabet;

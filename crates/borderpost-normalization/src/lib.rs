//! Checkpoint normalization crate.
//!
//! Converts raw checkpoint records into clean, display-ready records and
//! partitions them into output sets.
//!
//! # Overview
//!
//! This crate provides:
//! - **Status classification**: enumerated labels and free-text `Статус:` lines
//! - **Record normalization**: type filter, transliterated names, bilingual
//!   display name, admission gate
//! - **Batch execution**: ordered normalization of a whole source with counts
//! - **Grouping**: buckets by foreign country plus the flat list
//! - **Feature re-transliteration**: label rewriting for existing GeoJSON layers
//!
//! # Example
//!
//! ```ignore
//! use borderpost_model::NormalizeConfig;
//! use borderpost_normalization::{Normalizer, dispatch, execute_normalization};
//!
//! let normalizer = Normalizer::new(&NormalizeConfig::default());
//! let batch = execute_normalization(&source.checkpoints, &normalizer);
//! for set in dispatch(&batch.records, "unknown") {
//!     println!("{:?}: {}", set.kind, set.records.len());
//! }
//! ```
//!
//! # Design Principles
//!
//! - **Explicit tables**: the transliteration table comes from configuration
//! - **Stable order**: records keep input order in every output set
//! - **Lenient data**: bad records are counted and dropped, never fatal

mod executor;
mod features;
mod grouping;
mod normalizer;
mod status;

// Status classification
pub use status::{
    BILATERAL_TERM, MULTILATERAL_TERM, classify_status, extract_status, extract_status_value,
};

// Record normalization
pub use normalizer::{Admission, NAME_SEPARATOR, Normalizer, compose_name, strip_parenthetical};

// Execution
pub use executor::{NormalizeReport, NormalizedBatch, execute_normalization};

// Grouping
pub use grouping::{OutputSet, SetKind, country_key, dispatch, group_by};

// GeoJSON layers
pub use features::{DESCRIPTION_KEYS, FeatureUpdateReport, NAME_KEYS, retransliterate_features};

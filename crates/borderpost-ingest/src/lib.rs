//! Source document ingestion.
//!
//! This crate reads the hierarchical checkpoint export and hands the
//! normalizer a flat, ordered list of raw records.
//!
//! # Features
//!
//! - **JSON Reading**: UTF-8 documents, BOM tolerant, fatal on malformed JSON
//! - **Hierarchy Flattening**: `federal_districts → regions → checkpoints`
//!   in document order
//! - **Lenient Records**: malformed regions or checkpoints are logged,
//!   counted, and skipped without aborting the batch
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use borderpost_ingest::load_checkpoints;
//!
//! let source = load_checkpoints(Path::new("ru-borders.json"))?;
//! println!("{} checkpoints, {} skipped", source.report.checkpoints, source.report.skipped);
//! ```

mod error;
mod hierarchy;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{read_json_array, read_json_document};

// === Hierarchy ===
pub use hierarchy::{
    CHECKPOINTS_KEY, DISTRICTS_KEY, IngestReport, SourceCheckpoints, collect_checkpoints,
    load_checkpoints,
};

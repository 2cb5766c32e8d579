//! Output generation for normalized checkpoints.
//!
//! - [`json`]: one indented JSON file per output set
//! - [`geojson`]: point `FeatureCollection` emission from flat records
//! - [`common`]: file naming and atomic JSON writes

pub mod common;
pub mod geojson;
pub mod json;
pub mod types;

pub use common::{
    default_geojson_path, ensure_output_dir, geojson_sibling, group_file_name, sanitize_key,
    write_json_pretty,
};
pub use geojson::{EmissionReport, GeoEmission, coordinate_value, emit_features, emit_records};
pub use json::{artifact_path, plan_json_outputs, write_json_outputs};
pub use types::{Feature, FeatureCollection, Geometry, WrittenArtifact};

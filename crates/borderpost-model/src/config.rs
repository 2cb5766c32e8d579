//! Pipeline configuration.
//!
//! Every section and field has a default, so an empty TOML document (or no
//! document at all) yields the standard settings:
//!
//! ```toml
//! [normalize]
//! target_type = "Automobile checkpoint"
//! alphabet = "russian"
//!
//! [output]
//! flat_file = "checkpoints.json"
//! group_prefix = "checkpoints_"
//! unknown_key = "unknown"
//! geojson = false
//! ```

use serde::{Deserialize, Serialize};

use borderpost_translit::Alphabet;

/// Checkpoint type admitted by default.
pub const DEFAULT_TARGET_TYPE: &str = "Automobile checkpoint";

/// Group key used for records without a resolvable foreign country.
pub const UNKNOWN_GROUP_KEY: &str = "unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub normalize: NormalizeConfig,
    pub output: OutputConfig,
}

/// Settings for the record normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Exact `checkpoint_type.title.en` label a record must carry.
    pub target_type: String,
    /// Character table used for checkpoint names.
    pub alphabet: Alphabet,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            target_type: DEFAULT_TARGET_TYPE.to_string(),
            alphabet: Alphabet::Russian,
        }
    }
}

/// Settings for written artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the flat list of every admitted record.
    pub flat_file: String,
    /// Prefix of per-group file names (`<prefix><key>.json`).
    pub group_prefix: String,
    /// Group key for records with no foreign country.
    pub unknown_key: String,
    /// Also emit a GeoJSON document next to the flat list.
    pub geojson: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            flat_file: "checkpoints.json".to_string(),
            group_prefix: "checkpoints_".to_string(),
            unknown_key: UNKNOWN_GROUP_KEY.to_string(),
            geojson: false,
        }
    }
}

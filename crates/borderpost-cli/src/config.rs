//! Pipeline configuration loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use borderpost_model::PipelineConfig;

/// Load a TOML pipeline configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let config: PipelineConfig =
        toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded pipeline configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use borderpost_model::Alphabet;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.output.flat_file, "checkpoints.json");
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("borderpost.toml");
        fs::write(
            &path,
            "[normalize]\nalphabet = \"kazakh\"\n\n[output]\ngeojson = true\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.normalize.alphabet, Alphabet::Kazakh);
        assert_eq!(config.normalize.target_type, "Automobile checkpoint");
        assert!(config.output.geojson);
        assert_eq!(config.output.group_prefix, "checkpoints_");
    }

    #[test]
    fn test_invalid_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[normalize]\nalphabet = \"latin\"\n").unwrap();

        let error = load_config(Some(&path)).unwrap_err();
        assert!(format!("{error:#}").contains("bad.toml"));
    }
}

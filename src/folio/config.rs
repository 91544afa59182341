use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// The catalog consulted when neither `--catalog` nor the config file says
/// otherwise: a `data.json` next to wherever folio runs.
pub const DEFAULT_CATALOG: &str = "data.json";

/// Configuration for folio, stored as config.json in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    /// Default catalog location: a file path or an http(s) URL.
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_data_json() {
        let config = FolioConfig::default();
        assert_eq!(config.catalog, "data.json");
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let config = FolioConfig {
            catalog: "https://example.com/catalog.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = FolioConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_catalog_key_falls_back_to_default() {
        let parsed: FolioConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.catalog, "data.json");
    }
}

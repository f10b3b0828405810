//! Lineup store configuration.
//!
//! Defaults work out of the box. A JSON file named by `LINEUP_CONFIG_PATH`
//! overrides them; missing fields keep their defaults.
//!
//! ```json
//! { "storageDir": "/var/lib/lineups", "keyPrefix": "lineup_", "prettyJson": true }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{env, fs};

use crate::error::{LineupError, Result};
use crate::store::DEFAULT_KEY_PREFIX;

pub const CONFIG_PATH_ENV: &str = "LINEUP_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineupConfig {
    /// Directory for the file-backed store
    pub storage_dir: PathBuf,
    /// Prepended to the roster id to form the storage key
    pub key_prefix: String,
    /// Pretty-print stored records
    pub pretty_json: bool,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./lineups"),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            pretty_json: false,
        }
    }
}

impl LineupConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LineupError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let prefix_ok = !self.key_prefix.is_empty()
            && self.key_prefix.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if !prefix_ok {
            return Err(LineupError::Config(format!(
                "keyPrefix '{}' must be non-empty and use only [A-Za-z0-9_-]",
                self.key_prefix
            )));
        }
        if self.storage_dir.as_os_str().is_empty() {
            return Err(LineupError::Config("storageDir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Reads and validates a config file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LineupError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config = Self::from_json(&content)?;
        config.validate()?;
        log::debug!("Loaded lineup config from {}", path.display());
        Ok(config)
    }

    /// Config from the file named by `LINEUP_CONFIG_PATH`; defaults when the
    /// variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(std::path::Path::new(path))
    }
}

use crate::error::ConfigError;
use crate::links::LinkConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub links: LinkConfig,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        Ok(Self::from_toml_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_str = self.to_toml_string()?;
        fs::write(path, toml_str)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.links.max_links_per_message == 0 {
            return Err(ConfigError::Validation(
                "links.max_links_per_message must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

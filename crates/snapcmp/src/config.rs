use anyhow::{Context, Result};
use serde::Deserialize;
use snapcmp_core::{ComparatorConfig, Detail};
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub comparator: ComparatorConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub detail: Option<u8>,
    pub square_side: Option<u32>,
    pub tolerance_percent: Option<u32>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    pub fn with_overrides(self, overrides: Overrides) -> Result<Self> {
        let current = self.comparator;
        let detail = match overrides.detail {
            Some(level) => Detail::try_from(level)?,
            None => current.detail(),
        };
        let comparator = ComparatorConfig::new(
            detail,
            overrides.square_side.unwrap_or(current.square_side()),
            overrides
                .tolerance_percent
                .unwrap_or(current.tolerance_percent()),
        )
        .context("Invalid comparator settings")?;
        Ok(Self { comparator })
    }
}

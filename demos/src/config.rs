//! Demo settings, read from a TOML file.
//!
//! ```toml
//! [search]
//! max_expansions = 20000
//! bounds = { min = { x = 0, y = 0 }, max = { x = 40, y = 20 } }
//!
//! [body]
//! width = 2
//! height = 2
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use strider_paths::SearchConfig;
use thiserror::Error;

/// Everything the demo can be told through its config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub search: SearchConfig,
    pub body: BodySize,
}

/// Footprint of the searching entity, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BodySize {
    pub width: i32,
    pub height: i32,
}

impl Default for BodySize {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DemoConfig {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

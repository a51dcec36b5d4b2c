//! Configuration handling for palettecheck

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::validator::ValidationConfig;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "palettecheck.toml";

/// Palettecheck configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Contrast check settings
    #[serde(default)]
    pub check: CheckConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Contrast check settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CheckConfig {
    /// Use the large-text AAA threshold (4.5:1)
    #[serde(default)]
    pub large_text: bool,
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Colorize pass/fail markers when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, PaletteError> {
        toml::from_str(content).map_err(|e| PaletteError::Config(e.to_string()))
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let content = fs::read_to_string(path)
            .map_err(|e| PaletteError::Config(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Load `palettecheck.toml` from `dir`, falling back to defaults when absent
    pub fn load_from_dir(dir: &Path) -> Result<Self, PaletteError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validation options derived from this configuration
    pub fn validation(&self) -> ValidationConfig {
        ValidationConfig {
            large_text: self.check.large_text,
        }
    }
}

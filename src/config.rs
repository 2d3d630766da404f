//! Project configuration.
//!
//! An optional `weft.toml` in the working directory supplies defaults for
//! `weft convert`. Flags given on the command line always win.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Platform;

/// Default configuration file name
pub const CONFIG_FILE: &str = "weft.toml";

/// Default output directory when neither flag nor file sets one
pub const DEFAULT_OUT_DIR: &str = ".";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// The `[convert]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Platforms converted when no `--target` is given; empty means all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub quiet: bool,
}

impl Config {
    /// Load configuration from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `weft.toml` from `dir`, or defaults when the file is absent
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

impl ConvertConfig {
    /// Requested platforms, or every platform when none are configured
    pub fn targets_or_all(&self) -> Vec<Platform> {
        if self.targets.is_empty() {
            Platform::ALL.to_vec()
        } else {
            self.targets.clone()
        }
    }

    pub fn out_dir_or_default(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }
}

//! User configuration.
//!
//! Loaded from `config.toml` in the platform config directory
//! (`~/.config/demotape/config.toml` on Linux). Every field is optional;
//! a missing file means defaults.
//!
//! ```toml
//! theme = "ocean"
//!
//! [timing]
//! command_char_ms = 60
//! restart_ms = 5000
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::Timing;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name; `None` means the default theme.
    pub theme: Option<String>,
    /// Timing overrides; unset fields keep their defaults.
    pub timing: Timing,
}

impl Config {
    /// Path of the config file in the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(dir.join("demotape").join("config.toml"))
    }

    /// Load the user config, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse a config document.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

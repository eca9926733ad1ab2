//! Configuration loader/writer plus strongly typed settings structures.
//!
//! Deserializes `config.toml` from the data directory (extracting the
//! embedded default on first run) and resolves the data directory itself.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod validator;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64, // Event poll timeout in milliseconds (lower = higher FPS, higher CPU)
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: u32, // Scroll offset (16 per row) past which the nav switches to its "scrolled" style
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
    #[serde(default = "default_theme_name")]
    pub theme: String,
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_poll_timeout_ms() -> u64 {
    16
}

fn default_scroll_threshold() -> u32 {
    50
}

fn default_scroll_step() -> u16 {
    3
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            scroll_threshold: default_scroll_threshold(),
            scroll_step: default_scroll_step(),
            theme: default_theme_name(),
            mouse: default_mouse(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the data directory, extracting defaults first
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        Self::load_from_path(&Self::config_path()?)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        Self::parse(&contents).context(format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The configuration shipped with the binary
    #[cfg(test)]
    pub fn embedded_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("Embedded default config is invalid")
    }

    /// Expose base directory path (~/.folio) for other systems (e.g., logging).
    pub fn base_dir() -> Result<PathBuf> {
        Self::config_dir()
    }

    /// Get the base folio directory (~/.folio/)
    /// Can be overridden with FOLIO_DIR environment variable
    fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("FOLIO_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".folio"))
    }

    /// Get path to config.toml
    /// Returns: ~/.folio/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Write the embedded config.toml if none exists yet (idempotent)
    fn extract_defaults() -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir).context(format!("Failed to create data directory {:?}", dir))?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
            tracing::info!("Extracted default config to {:?}", config_path);
        }
        Ok(())
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the ClickUp v2 API. Overridable for tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://api.clickup.com/api/v2".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Minimum width of one task card; the grid fits as many columns as
    /// the terminal allows at this width (capped at three).
    #[serde(default = "default_card_min_width")]
    pub card_min_width: u16,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_card_min_width() -> u16 {
    36
}

fn default_tick_millis() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            card_min_width: default_card_min_width(),
            tick_millis: default_tick_millis(),
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "taskdeck")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config file, or fall back to defaults when none exists.
///
/// The token is entered in-app, so a config file is optional tuning; an
/// explicitly passed path must exist, the default path may not.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_clickup() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.clickup.com/api/v2");
        assert!(config.ui.card_min_width > 0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"http://localhost:1\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:1");
        assert_eq!(config.ui.tick_millis, default_tick_millis());
    }
}

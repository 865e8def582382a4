//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::UpdatePolicy;

pub const APP_DIR_NAME: &str = "task-tracker";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the task files; the working directory when unset
    #[serde(default)]
    pub root: Option<String>,

    #[serde(default)]
    pub update_policy: UpdatePolicy,
}

impl StoreConfig {
    /// The configured root with a leading `~/` expanded
    pub fn root_path(&self) -> Option<PathBuf> {
        self.root.as_ref().map(|s| {
            if let Some(stripped) = s.strip_prefix("~/") {
                if let Some(home) = dirs::home_dir() {
                    return home.join(stripped);
                }
            }
            PathBuf::from(s)
        })
    }
}

pub fn get_app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Cannot find config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving viewer preferences to a `settings.toml` file.
//!
//! Only three preferences persist across sessions: the initial autoplay flag,
//! the autoplay cadence, and whether zoom is offered at all. Session state
//! (current frame, scale, pan) is deliberately never persisted.

mod defaults;

pub use defaults::{
    DEFAULT_AUTO_ROTATE, DEFAULT_ROTATION_SPEED_MS, DEFAULT_ZOOM_ENABLED, FULL_ROTATION_DISTANCE,
    MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, ZOOM_STEP_FACTOR,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SpinLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Start spinning automatically when a sequence is mounted.
    #[serde(default)]
    pub auto_rotate: Option<bool>,
    /// Autoplay tick interval in milliseconds.
    #[serde(default)]
    pub rotation_speed_ms: Option<u64>,
    /// Whether zoom controls and gestures are offered.
    #[serde(default)]
    pub zoom_enabled: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_rotate: Some(DEFAULT_AUTO_ROTATE),
            rotation_speed_ms: Some(DEFAULT_ROTATION_SPEED_MS),
            zoom_enabled: Some(DEFAULT_ZOOM_ENABLED),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

//! Scene configuration persistence
//!
//! Loads [`SceneConfig`] from a JSON file and writes the defaults out so users
//! have a template to edit.
//!
//! # File Location
//!
//! The default file is `scene.json` in the user's configuration directory,
//! e.g. `~/.config/holoboard/scene.json` on Linux. A path passed on the command
//! line takes precedence.
//!
//! # Error Handling
//!
//! - A missing default file is not an error: defaults are used
//! - Unreadable or invalid files are reported as [`CoreError`] and the caller
//!   decides whether to fall back

use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{CoreError, CoreResult};
use super::resources::SceneConfig;

/// Config filename
const CONFIG_FILENAME: &str = "scene.json";

/// Resolves the default config file path
///
/// Falls back to `scene.json` in the working directory when the platform has
/// no config directory (this includes the browser).
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "holoboard", "holoboard") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Reads and validates a config file
pub fn load_config(path: &Path) -> CoreResult<SceneConfig> {
    let contents = fs::read_to_string(path).map_err(|source| CoreError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SceneConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    info!("[CONFIG] Loaded scene config from {:?}", path);
    Ok(config)
}

/// Loads the config from the default location
///
/// Any failure is logged and replaced by [`SceneConfig::default`].
pub fn load_config_or_default() -> SceneConfig {
    let path = default_config_path();
    if !path.exists() {
        info!("[CONFIG] No config file at {:?}. Using defaults.", path);
        return SceneConfig::default();
    }

    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("[CONFIG] {}. Using defaults.", e);
            SceneConfig::default()
        }
    }
}

/// Writes a config as pretty JSON, creating parent directories as needed
pub fn save_config(config: &SceneConfig, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| CoreError::ConfigIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(|source| CoreError::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    info!("[CONFIG] Saved scene config to {:?}", path);
    Ok(())
}

// Configuration module for snackbar
// This module handles loading and parsing configuration from ~/.config/snackbar/config.toml

mod types;

pub use types::{Config, SnackbarConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SnackbarError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/snackbar/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Same as [`load_config`] for an explicit path
pub fn load_config_from(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Reads and parses the config at `path`.
///
/// A missing file is not an error and yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, SnackbarError> {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", path);

    if !path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| SnackbarError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Config file read successfully, {} bytes", contents.len());

    toml::from_str::<Config>(&contents).map_err(|source| SnackbarError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/snackbar/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("snackbar")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

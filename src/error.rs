use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown icon set: {0} (expected mdi, ascii or none)")]
    UnknownIconSet(String),
}

#[derive(Debug, Error)]
pub enum SnackbarError {
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

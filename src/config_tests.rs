//! Tests for config

use super::*;
use crate::notification::Severity;
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.snackbar.severity, Severity::Success);
    assert_eq!(config.snackbar.timeout_ms, 3000);
    assert_eq!(config.theme.default_theme, "light");
}

#[test]
fn test_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));
    assert!(result.warning.is_none());
    assert_eq!(result.config, Config::default());
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r##"
[snackbar]
severity = "info"
timeout_ms = 4500

[theme]
default_theme = "dark"

[theme.icons]
default_set = "ascii"

[theme.themes.dark.colors]
primary = "#bb86fc"
"##,
    );

    let result = load_config_from(file.path());
    assert!(result.warning.is_none(), "{:?}", result.warning);

    let config = result.config;
    assert_eq!(config.snackbar.severity, Severity::Info);
    assert_eq!(config.snackbar.timeout_ms, 4500);
    assert_eq!(config.theme.default_theme, "dark");
    assert_eq!(config.theme.icons.default_set, "ascii");
    assert_eq!(
        config.theme.themes["dark"].colors.primary.as_deref(),
        Some("#bb86fc")
    );
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let file = write_config("[snackbar\ntimeout_ms = 10");

    let result = load_config_from(file.path());
    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.starts_with("Invalid config"), "{}", warning);
}

#[test]
fn test_read_config_reports_parse_error() {
    let file = write_config("[snackbar]\ntimeout_ms = \"soon\"\n");
    assert!(matches!(
        read_config(file.path()),
        Err(SnackbarError::ConfigParse { .. })
    ));
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(dir.path());
    assert_eq!(result.config, Config::default());
    assert!(result
        .warning
        .expect("directory should not load")
        .starts_with("Failed to read config"));
}

#[test]
fn test_config_path_consistency() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("snackbar/config.toml") || path_str.ends_with("snackbar\\config.toml"),
        "unexpected config path: {}",
        path_str
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Malformed TOML never aborts loading; defaults come back with a warning
    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[snackbar\ntimeout_ms = 1",
            "[snackbar]\nseverity = error",
            "[snackbar]\n timeout_ms",
            "snackbar]\ntimeout_ms = 1",
            "[snackbar]\nseverity = \"error",
            "[theme]\nthemes = 5",
        ])
    ) {
        let file = write_config(malformed);
        let result = load_config_from(file.path());
        prop_assert_eq!(result.config, Config::default());
        prop_assert!(result.warning.is_some());
    }
}

// Configuration type definitions

use serde::Deserialize;

use crate::notification::{DEFAULT_TIMEOUT_MS, NotifyDefaults, Severity};
use crate::theme::ThemeConfig;

/// Snackbar configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnackbarConfig {
    /// Severity used when a notification does not name one
    #[serde(default)]
    pub severity: Severity,
    /// Timeout used when a notification does not give one; 0 keeps the
    /// banner up until dismissed
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        SnackbarConfig {
            severity: Severity::Success,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SnackbarConfig {
    pub fn notify_defaults(&self) -> NotifyDefaults {
        NotifyDefaults {
            severity: self.severity.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub snackbar: SnackbarConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

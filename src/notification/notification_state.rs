//! Notification record
//!
//! The plain data shown by the snackbar: visibility, text, severity tag and
//! the advisory auto-dismiss timeout.

use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Timeout used when a caller does not supply one
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Semantic category used to style a notification.
///
/// The set is open: any tag that is not one of the known ones is kept as
/// `Other` and rendered as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Other(tag) => tag,
        }
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        match tag {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(tag: String) -> Self {
        match Severity::from(tag.as_str()) {
            Severity::Other(_) => Severity::Other(tag),
            known => known,
        }
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shared notification record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    pub timeout_ms: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::Success,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite message, severity and timeout, then mark visible.
    pub(super) fn show(&mut self, message: String, severity: Severity, timeout_ms: u64) {
        self.message = message;
        self.severity = severity;
        self.timeout_ms = timeout_ms;
        self.visible = true;
    }

    /// Hide the banner, returns true if it was visible
    pub(super) fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Whether the banner stays up until dismissed
    pub fn is_persistent(&self) -> bool {
        self.timeout_ms == 0
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;

//! snackbar library - shared notification state for terminal UIs
//!
//! One [`Snackbar`] handle owns the notification record. Clone it into any
//! component that needs to raise or observe notifications; render it with
//! [`notification::render_snackbar`] using a [`theme::Palette`].

pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notification::{NotificationState, Severity, Snackbar};

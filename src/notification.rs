//! Notification module for snackbar
//!
//! Holds the one shared notification record and everything that reads it.
//! Any component that has a clone of the [`Snackbar`] handle can raise a
//! notification without threading data through the layers in between.

mod notification_render;
mod notification_state;
mod notification_timer;
mod snackbar;

pub use notification_render::{render_snackbar, snackbar_area};
pub use notification_state::{DEFAULT_TIMEOUT_MS, NotificationState, Severity};
pub use notification_timer::SnackbarTimer;
pub use snackbar::{NotifyDefaults, Snackbar, Subscription};

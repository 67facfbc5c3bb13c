//! Auto-dismiss timing
//!
//! The record only carries `timeout_ms` as advisory data. The UI owns the
//! countdown: it calls [`SnackbarTimer::tick`] once per loop iteration.

use std::time::{Duration, Instant};

use super::snackbar::Snackbar;

#[derive(Debug, Default)]
pub struct SnackbarTimer {
    /// Revision of the notification being timed, and when it was first seen
    shown: Option<(u64, Instant)>,
}

impl SnackbarTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss the snackbar once its timeout has elapsed.
    ///
    /// A new notification restarts the countdown. A timeout of 0 never
    /// expires. Returns true if this call dismissed the banner.
    pub fn tick(&mut self, snackbar: &Snackbar, now: Instant) -> bool {
        let (visible, persistent, timeout_ms) = {
            let state = snackbar.state();
            (state.visible, state.is_persistent(), state.timeout_ms)
        };

        if !visible {
            self.shown = None;
            return false;
        }

        let revision = snackbar.revision();
        let shown_at = match self.shown {
            Some((seen, at)) if seen == revision => at,
            _ => {
                self.shown = Some((revision, now));
                now
            }
        };

        if persistent {
            return false;
        }

        if now.saturating_duration_since(shown_at) >= Duration::from_millis(timeout_ms) {
            self.shown = None;
            snackbar.dismiss();
            return true;
        }
        false
    }

    /// Time left before the current banner is dismissed, if it is timed.
    /// A banner the timer has not seen yet has its whole timeout left.
    pub fn remaining(&self, snackbar: &Snackbar, now: Instant) -> Option<Duration> {
        let state = snackbar.state();
        if !state.visible || state.is_persistent() {
            return None;
        }
        let timeout = Duration::from_millis(state.timeout_ms);
        match self.shown {
            Some((seen, shown_at)) if seen == snackbar.revision() => {
                Some(timeout.saturating_sub(now.saturating_duration_since(shown_at)))
            }
            _ => Some(timeout),
        }
    }
}

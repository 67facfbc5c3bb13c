use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::config::Config;
use crate::notification::{Snackbar, SnackbarTimer, Subscription};
use crate::theme::{IconSet, Palette};

pub struct App {
    pub snackbar: Snackbar,
    pub timer: SnackbarTimer,
    pub palette: Palette,
    pub icons: IconSet,
    pub theme_name: String,
    pub should_quit: bool,
    /// Notifications fired from the keyboard so far
    pub fired: u32,
    /// Problems found while starting up, shown together as one warning
    pub startup_warnings: Vec<String>,
    needs_render: Rc<Cell<bool>>,
    _snackbar_subscription: Subscription,
}

impl App {
    /// Build the app and show any startup warnings right away
    pub fn new(config: &Config) -> Self {
        let app = Self::new_quiet(config);
        app.show_startup_warnings();
        app
    }

    /// Build the app, leaving theme and icon warnings in `startup_warnings`
    /// for the caller to extend and show with `show_startup_warnings`
    pub fn new_quiet(config: &Config) -> Self {
        let snackbar = Snackbar::with_defaults(config.snackbar.notify_defaults());

        let needs_render = Rc::new(Cell::new(true));
        let dirty = Rc::clone(&needs_render);
        let subscription = snackbar.subscribe(move |_| dirty.set(true));

        let mut warnings = Vec::new();

        let palette = config.theme.palette().unwrap_or_else(|e| {
            warnings.push(format!("{}, using terminal colors", e));
            Palette::terminal()
        });

        let icons = config.theme.icons.icon_set().unwrap_or_else(|e| {
            warnings.push(format!("{}, using ascii icons", e));
            IconSet::Ascii
        });

        Self {
            snackbar,
            timer: SnackbarTimer::new(),
            palette,
            icons,
            theme_name: config.theme.default_theme.clone(),
            should_quit: false,
            fired: 0,
            startup_warnings: warnings,
            needs_render,
            _snackbar_subscription: subscription,
        }
    }

    /// Raise every startup warning as a single notification
    pub fn show_startup_warnings(&self) {
        if self.startup_warnings.is_empty() {
            return;
        }

        #[cfg(debug_assertions)]
        for warning in &self.startup_warnings {
            log::warn!("{}", warning);
        }

        self.snackbar.warning(self.startup_warnings.join("; "));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render.set(true);
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render.set(false);
    }

    pub fn should_render(&self) -> bool {
        self.needs_render.get()
    }

    /// Advance the auto-dismiss countdown
    pub fn tick(&mut self, now: Instant) {
        self.timer.tick(&self.snackbar, now);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

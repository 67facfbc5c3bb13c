//! Theme configuration for the snackbar and the demo UI.
//!
//! A theme is a set of named colors written as hex strings plus a `dark`
//! flag. The built-in `light` theme carries the brand colors; `dark` is
//! always available as well. Configured themes may override any color and
//! fall back to the built-in palette for the rest.
//!
//! Renderers never read hex strings directly: they resolve a [`Palette`]
//! once and use its `ratatui` colors.

mod colors;
mod icons;
mod types;

pub use colors::{contrast_text, parse_color};
pub use icons::IconSet;
pub use types::{IconConfig, Palette, SnackbarColors, Theme, ThemeColors, ThemeConfig};

/// Built-in color values, as hex strings
pub mod builtin {
    pub const DEFAULT_THEME: &str = "light";
    pub const DEFAULT_ICON_SET: &str = "mdi";

    /// Light theme with brand colors
    pub mod light {
        pub const PRIMARY: &str = "#3dae2f";
        pub const SECONDARY: &str = "#f0f9ef";
        pub const SURFACE: &str = "#FFFBFE";
        pub const BACKGROUND: &str = "#f4f5f6";
        pub const SUCCESS: &str = "#4CAF50";
        pub const ERROR: &str = "#B00020";
        pub const INFO: &str = "#2196F3";
        pub const WARNING: &str = "#FB8C00";
    }

    pub mod dark {
        pub const PRIMARY: &str = "#2196F3";
        pub const SECONDARY: &str = "#54B6B2";
        pub const SURFACE: &str = "#212121";
        pub const BACKGROUND: &str = "#121212";
        pub const SUCCESS: &str = "#4CAF50";
        pub const ERROR: &str = "#CF6679";
        pub const INFO: &str = "#2196F3";
        pub const WARNING: &str = "#FB8C00";
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod theme_tests;

// Theme type definitions

use std::collections::BTreeMap;

use ratatui::style::Color;
use serde::Deserialize;

use super::builtin;
use super::colors::{contrast_text, parse_color};
use super::icons::IconSet;
use crate::error::ThemeError;
use crate::notification::Severity;

/// Hex colors of a theme. Unset entries come from the built-in light or
/// dark palette, depending on the theme's `dark` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub surface: Option<String>,
    pub background: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
}

impl ThemeColors {
    pub fn resolve(&self, dark: bool) -> Result<Palette, ThemeError> {
        let pick = |configured: &Option<String>, light: &str, dark_value: &str| {
            let value = configured
                .as_deref()
                .unwrap_or(if dark { dark_value } else { light });
            parse_color(value)
        };

        let surface = pick(&self.surface, builtin::light::SURFACE, builtin::dark::SURFACE)?;
        let background = pick(
            &self.background,
            builtin::light::BACKGROUND,
            builtin::dark::BACKGROUND,
        )?;

        Ok(Palette {
            dark,
            primary: pick(&self.primary, builtin::light::PRIMARY, builtin::dark::PRIMARY)?,
            secondary: pick(
                &self.secondary,
                builtin::light::SECONDARY,
                builtin::dark::SECONDARY,
            )?,
            surface,
            background,
            success: pick(&self.success, builtin::light::SUCCESS, builtin::dark::SUCCESS)?,
            error: pick(&self.error, builtin::light::ERROR, builtin::dark::ERROR)?,
            info: pick(&self.info, builtin::light::INFO, builtin::dark::INFO)?,
            warning: pick(&self.warning, builtin::light::WARNING, builtin::dark::WARNING)?,
            on_surface: contrast_text(surface),
            on_background: contrast_text(background),
        })
    }
}

/// A named theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn light() -> Self {
        Self::default()
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            colors: ThemeColors::default(),
        }
    }

    pub fn palette(&self) -> Result<Palette, ThemeError> {
        self.colors.resolve(self.dark)
    }
}

/// Icon configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub default_set: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            default_set: builtin::DEFAULT_ICON_SET.to_string(),
        }
    }
}

impl IconConfig {
    pub fn icon_set(&self) -> Result<IconSet, ThemeError> {
        IconSet::from_name(&self.default_set)
    }
}

/// Theme configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub default_theme: String,
    pub themes: BTreeMap<String, Theme>,
    pub icons: IconConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            default_theme: builtin::DEFAULT_THEME.to_string(),
            themes: BTreeMap::new(),
            icons: IconConfig::default(),
        }
    }
}

impl ThemeConfig {
    /// Look up a theme by name. Configured themes shadow the built-in
    /// `light` and `dark` ones.
    pub fn theme(&self, name: &str) -> Result<Theme, ThemeError> {
        if let Some(theme) = self.themes.get(name) {
            return Ok(theme.clone());
        }
        match name {
            "light" => Ok(Theme::light()),
            "dark" => Ok(Theme::dark()),
            _ => Err(ThemeError::UnknownTheme(name.to_string())),
        }
    }

    pub fn active_theme(&self) -> Result<Theme, ThemeError> {
        self.theme(&self.default_theme)
    }

    /// Palette of the active theme
    pub fn palette(&self) -> Result<Palette, ThemeError> {
        self.active_theme()?.palette()
    }

    /// Every selectable theme name, configured and built-in
    pub fn theme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        for builtin in ["dark", "light"] {
            if !self.themes.contains_key(builtin) {
                names.push(builtin.to_string());
            }
        }
        names.sort();
        names
    }
}

/// Colors for one snackbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnackbarColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// Resolved theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: bool,
    pub primary: Color,
    pub secondary: Color,
    pub surface: Color,
    pub background: Color,
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub warning: Color,
    pub on_surface: Color,
    pub on_background: Color,
}

impl Palette {
    /// Palette built from the terminal's own named colors. Used when the
    /// configured theme cannot be resolved.
    pub fn terminal() -> Self {
        Palette {
            dark: true,
            primary: Color::Green,
            secondary: Color::Cyan,
            surface: Color::DarkGray,
            background: Color::Reset,
            success: Color::Green,
            error: Color::Red,
            info: Color::Blue,
            warning: Color::Yellow,
            on_surface: Color::White,
            on_background: Color::Reset,
        }
    }

    /// Banner colors for a severity.
    ///
    /// Known severities use their palette entry. Other tags may name a
    /// theme color (`primary`, `secondary`, `surface`, `background`) or a
    /// color literal; anything else gets the neutral surface style.
    pub fn severity_colors(&self, severity: &Severity) -> SnackbarColors {
        let filled = |bg: Color| SnackbarColors {
            fg: contrast_text(bg),
            bg,
            border: bg,
        };

        match severity {
            Severity::Success => filled(self.success),
            Severity::Error => filled(self.error),
            Severity::Warning => filled(self.warning),
            Severity::Info => filled(self.info),
            Severity::Other(tag) => match tag.as_str() {
                "primary" => filled(self.primary),
                "secondary" => filled(self.secondary),
                "surface" => self.neutral(),
                "background" => filled(self.background),
                literal => parse_color(literal)
                    .map(filled)
                    .unwrap_or_else(|_| self.neutral()),
            },
        }
    }

    fn neutral(&self) -> SnackbarColors {
        SnackbarColors {
            fg: self.on_surface,
            bg: self.surface,
            border: self.primary,
        }
    }
}

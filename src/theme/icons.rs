//! Severity icons

use crate::error::ThemeError;
use crate::notification::Severity;

/// Icon set used in front of the snackbar message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    /// Material Design Icons as shipped in Nerd Fonts
    #[default]
    Mdi,
    /// Plain characters for terminals without a patched font
    Ascii,
    None,
}

impl IconSet {
    pub fn from_name(name: &str) -> Result<Self, ThemeError> {
        match name {
            "mdi" => Ok(IconSet::Mdi),
            "ascii" => Ok(IconSet::Ascii),
            "none" => Ok(IconSet::None),
            other => Err(ThemeError::UnknownIconSet(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IconSet::Mdi => "mdi",
            IconSet::Ascii => "ascii",
            IconSet::None => "none",
        }
    }

    /// Glyph shown for `severity`, empty for `IconSet::None`
    pub fn glyph(self, severity: &Severity) -> &'static str {
        match self {
            IconSet::Mdi => match severity {
                Severity::Success => "\u{f05e0}", // check-circle
                Severity::Error => "\u{f0028}",   // alert-circle
                Severity::Warning => "\u{f0026}", // alert
                Severity::Info => "\u{f02fc}",    // information
                Severity::Other(_) => "\u{f009a}", // bell
            },
            IconSet::Ascii => match severity {
                Severity::Success => "+",
                Severity::Error => "x",
                Severity::Warning => "!",
                Severity::Info => "i",
                Severity::Other(_) => "*",
            },
            IconSet::None => "",
        }
    }
}

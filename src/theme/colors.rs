//! Color parsing

use ratatui::style::Color;

use crate::error::ThemeError;

/// Parse a color value: `#RGB`, `#RRGGBB`, or a terminal color name
/// such as `red` or `light-blue`.
pub fn parse_color(value: &str) -> Result<Color, ThemeError> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    parse_named(value)
}

fn parse_hex(hex: &str) -> Result<Color, ThemeError> {
    let err = || ThemeError::InvalidColor(format!("#{hex}"));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| err());

    match hex.len() {
        3 => Ok(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Ok(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(err()),
    }
}

fn parse_named(name: &str) -> Result<Color, ThemeError> {
    let normalized = name.to_lowercase().replace(['-', '_', ' '], "");

    match normalized.as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(ThemeError::InvalidColor(name.to_string())),
    }
}

/// Readable text color for a given background.
///
/// RGB backgrounds use relative luminance; named terminal colors use a
/// fixed split between dark and light ones.
pub fn contrast_text(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luminance =
                0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
            if luminance > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        Color::Gray
        | Color::White
        | Color::Yellow
        | Color::Cyan
        | Color::Green
        | Color::LightRed
        | Color::LightGreen
        | Color::LightYellow
        | Color::LightBlue
        | Color::LightMagenta
        | Color::LightCyan => Color::Black,
        _ => Color::White,
    }
}

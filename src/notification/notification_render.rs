//! Snackbar rendering
//!
//! Draws the shared notification as a one-line banner at the bottom of the
//! frame, styled by severity.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::snackbar::Snackbar;
use crate::theme::{IconSet, Palette};
use crate::widgets::popup;

const MARGIN: u16 = 1;
const HEIGHT: u16 = 3; // 1 line content + 2 borders

/// Where a banner with `content_width` columns of text goes inside
/// `frame_area`. `None` when the frame is too small to show it.
pub fn snackbar_area(frame_area: Rect, content_width: u16) -> Option<Rect> {
    let width = content_width
        .saturating_add(2)
        .min(frame_area.width.saturating_sub(MARGIN * 2));
    let area = popup::bottom_centered(frame_area, width, HEIGHT, MARGIN);

    if area.width < 5 || area.height < HEIGHT {
        return None;
    }
    Some(area)
}

/// The banner is one row: line breaks and other control characters
/// become spaces.
fn single_line(message: &str) -> String {
    message
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Render the snackbar on top of whatever is already in the frame.
///
/// Call this after the main UI. Draws nothing while the record is hidden.
/// Returns the area used, if any.
pub fn render_snackbar(
    frame: &mut Frame,
    snackbar: &Snackbar,
    palette: &Palette,
    icons: IconSet,
) -> Option<Rect> {
    let state = snackbar.state();
    if !state.visible {
        return None;
    }

    let colors = palette.severity_colors(&state.severity);
    let text_style = Style::default().fg(colors.fg).bg(colors.bg);

    let glyph = icons.glyph(&state.severity);
    let mut spans = vec![Span::styled(" ", text_style)];
    if !glyph.is_empty() {
        spans.push(Span::styled(
            format!("{} ", glyph),
            text_style.add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(format!("{} ", single_line(&state.message)), text_style));
    let line = Line::from(spans);

    let content_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    let area = snackbar_area(frame.area(), content_width)?;

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    frame.render_widget(Paragraph::new(line).block(block), area);
    Some(area)
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use std::time::Instant;

use super::app_state::App;
use crate::notification::render_snackbar;
use crate::widgets::popup;

const KEY_HINTS: &[(&str, &str)] = &[
    ("n", "notify with defaults"),
    ("s", "success"),
    ("e", "error"),
    ("w", "warning"),
    ("i", "info"),
    ("p", "pinned (no timeout)"),
    ("d", "dismiss"),
    ("q", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let palette = self.palette;

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .fg(palette.on_background)
                    .bg(palette.background),
            ),
            frame.area(),
        );

        let card_height = KEY_HINTS.len() as u16 + 5;
        let card = popup::centered_popup(frame.area(), 56, card_height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" snackbar ({}) ", self.theme_name))
            .border_style(Style::default().fg(palette.primary).bg(palette.surface))
            .style(Style::default().fg(palette.on_surface).bg(palette.surface));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [hints_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        let key_style = Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD);
        let hints: Vec<Line> = KEY_HINTS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!(" {:>3}  ", key), key_style),
                    Span::raw(*action),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(hints), hints_area);

        frame.render_widget(Paragraph::new(self.status_lines()), status_area);

        render_snackbar(frame, &self.snackbar, &self.palette, self.icons);
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let remaining = match self.timer.remaining(&self.snackbar, Instant::now()) {
            Some(left) => format!("{}ms", left.as_millis()),
            None if self.snackbar.state().visible => "pinned".to_string(),
            None => "-".to_string(),
        };
        let state = self.snackbar.state();
        vec![
            Line::from(format!(
                " visible={} severity={} timeout={}ms",
                state.visible, state.severity, state.timeout_ms
            )),
            Line::from(format!(
                " revision={} dismiss_in={}",
                self.snackbar.revision(),
                remaining
            )),
        ]
    }
}

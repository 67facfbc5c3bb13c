use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::notification::Severity;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('d') | KeyCode::Esc => self.snackbar.dismiss(),
            KeyCode::Char('n') => {
                let n = self.next_id();
                self.snackbar.notify(format!("Notification #{}", n));
            }
            KeyCode::Char('s') => {
                let n = self.next_id();
                self.snackbar.success(format!("Saved item #{}", n));
            }
            KeyCode::Char('e') => {
                let n = self.next_id();
                self.snackbar.error(format!("Failed to save item #{}", n));
            }
            KeyCode::Char('w') => {
                let n = self.next_id();
                self.snackbar
                    .warning(format!("Item #{} is almost out of space", n));
            }
            KeyCode::Char('i') => {
                let n = self.next_id();
                self.snackbar.info(format!("Item #{} synced", n));
            }
            KeyCode::Char('p') => {
                let n = self.next_id();
                self.snackbar.notify_with(
                    format!("Pinned #{}: press d to dismiss", n),
                    Severity::Info,
                    0,
                );
            }
            _ => {}
        }
    }

    fn next_id(&mut self) -> u32 {
        self.fired = self.fired.wrapping_add(1);
        self.fired
    }
}

//! Tests for app_state and app_events

use super::*;
use crate::notification::{NotificationState, Severity};
use crate::test_utils::test_helpers::{key, key_with_mods, test_app, test_app_with_config};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;
use std::time::Duration;

#[test]
fn test_initial_state() {
    let app = test_app();
    assert!(!app.should_quit());
    assert!(app.should_render(), "New app should need initial render");
    assert_eq!(app.snackbar.snapshot(), NotificationState::default());
    assert_eq!(app.theme_name, "light");
    assert_eq!(app.icons, IconSet::Mdi);
}

#[test]
fn test_clear_and_mark_dirty() {
    let mut app = test_app();
    app.clear_dirty();
    assert!(!app.should_render());

    app.mark_dirty();
    assert!(app.should_render());
}

#[test]
fn test_notify_from_any_handle_marks_dirty() {
    let mut app = test_app();
    app.clear_dirty();

    let handle = app.snackbar.clone();
    handle.error("Background job failed");

    assert!(app.should_render(), "notify should trigger a re-render");
    assert_eq!(app.snackbar.state().message, "Background job failed");
}

#[test]
fn test_timer_dismiss_marks_dirty() {
    let mut app = test_app();
    let start = Instant::now();

    app.snackbar.notify("Saved");
    app.tick(start);
    app.clear_dirty();

    app.tick(start + Duration::from_millis(3000));
    assert!(!app.snackbar.state().visible);
    assert!(app.should_render());
}

#[test]
fn test_idle_tick_does_not_mark_dirty() {
    let mut app = test_app();
    app.clear_dirty();
    app.tick(Instant::now());
    assert!(!app.should_render());
}

#[test]
fn test_key_n_uses_config_defaults() {
    let mut app = test_app_with_config("[snackbar]\nseverity = \"info\"\ntimeout_ms = 1200\n");
    app.handle_key_event(key(KeyCode::Char('n')));

    let state = app.snackbar.snapshot();
    assert!(state.visible);
    assert_eq!(state.message, "Notification #1");
    assert_eq!(state.severity, Severity::Info);
    assert_eq!(state.timeout_ms, 1200);
}

#[test]
fn test_severity_keys() {
    let mut app = test_app();

    let cases = [
        ('s', Severity::Success),
        ('e', Severity::Error),
        ('w', Severity::Warning),
        ('i', Severity::Info),
    ];
    for (ch, expected) in cases {
        app.handle_key_event(key(KeyCode::Char(ch)));
        let state = app.snackbar.snapshot();
        assert!(state.visible);
        assert_eq!(state.severity, expected);
        assert_eq!(state.timeout_ms, 3000);
    }
    assert_eq!(app.fired, 4);
    assert_eq!(app.snackbar.state().message, "Item #4 synced");
}

#[test]
fn test_pinned_key_has_no_timeout() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('p')));

    let state = app.snackbar.snapshot();
    assert_eq!(state.timeout_ms, 0);
    assert!(state.is_persistent());
}

#[test]
fn test_dismiss_keys() {
    let mut app = test_app();

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Char('d')));
    assert!(!app.snackbar.state().visible);

    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.snackbar.state().visible);
}

#[test]
fn test_quit_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_control_chords_do_not_notify() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert!(!app.snackbar.state().visible);
    assert!(!app.should_quit());
}

#[test]
fn test_invalid_theme_falls_back_with_warning() {
    let app = test_app_with_config("[theme]\ndefault_theme = \"nope\"\n");

    assert_eq!(app.palette, Palette::terminal());
    let state = app.snackbar.snapshot();
    assert!(state.visible);
    assert_eq!(state.severity, Severity::Warning);
    assert!(state.message.contains("Unknown theme: nope"), "{}", state.message);
}

#[test]
fn test_invalid_icon_set_falls_back_with_warning() {
    let app = test_app_with_config("[theme.icons]\ndefault_set = \"fa\"\n");

    assert_eq!(app.icons, IconSet::Ascii);
    assert!(app.snackbar.state().message.contains("Unknown icon set: fa"));
}

#[test]
fn test_configured_theme_palette() {
    let app = test_app_with_config(
        r##"
[theme]
default_theme = "brand"

[theme.themes.brand.colors]
primary = "#010203"
"##,
    );
    assert_eq!(app.palette.primary, Color::Rgb(1, 2, 3));
    assert_eq!(app.theme_name, "brand");
    assert!(!app.snackbar.state().visible);
}

#[test]
fn test_theme_and_icon_warnings_shown_together() {
    let app = test_app_with_config(
        "[theme]\ndefault_theme = \"nope\"\n\n[theme.icons]\ndefault_set = \"fa\"\n",
    );

    assert_eq!(app.snackbar.revision(), 1, "one notification for all warnings");
    let message = app.snackbar.state().message.clone();
    assert!(message.contains("Unknown theme: nope"), "{}", message);
    assert!(message.contains("Unknown icon set: fa"), "{}", message);
}

#[test]
fn test_startup_message_does_not_hide_warnings() {
    let config: Config = toml::from_str("[theme]\ndefault_theme = \"nope\"\n").unwrap();
    let mut app = App::new_quiet(&config);
    assert!(!app.snackbar.state().visible, "new_quiet must not notify");

    app.startup_warnings
        .insert(0, "Invalid config /tmp/x.toml: bad".to_string());
    app.snackbar.notify("Hello from the command line");
    app.show_startup_warnings();

    let state = app.snackbar.snapshot();
    assert_eq!(state.severity, Severity::Warning);
    assert!(state.message.starts_with("Invalid config /tmp/x.toml: bad; "));
    assert!(state.message.contains("Unknown theme: nope"));
}

#[test]
fn test_no_warnings_means_no_notification() {
    let app = test_app();
    app.show_startup_warnings();
    assert_eq!(app.snackbar.revision(), 0);
}

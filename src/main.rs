use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use snackbar::app::App;
use snackbar::config::{self, Config, ConfigResult};
use snackbar::error::SnackbarError;
use snackbar::notification::Severity;

/// Snackbar notification demo
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Shared snackbar notifications with a themed terminal banner"
)]
struct Args {
    /// Config file (defaults to ~/.config/snackbar/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme to use instead of the configured default
    #[arg(long)]
    theme: Option<String>,

    /// Notification to show on startup
    #[arg(long)]
    message: Option<String>,

    /// Severity of the startup notification (success, error, warning, info, or any tag)
    #[arg(long, requires = "message")]
    severity: Option<String>,

    /// Timeout of the startup notification in milliseconds, 0 to pin it
    #[arg(long, requires = "message")]
    timeout_ms: Option<u64>,

    /// Validate the config, print the resolved theme and exit
    #[arg(long)]
    check_config: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/snackbar-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(config::get_config_path);

    if args.check_config {
        check_config(&config_path, args.theme.as_deref())?;
        return Ok(());
    }

    let mut config_result = config::load_config_from(&config_path);
    if let Some(theme) = &args.theme {
        config_result.config.theme.default_theme = theme.clone();
    }

    let terminal = init_terminal()?;
    let app = App::new_quiet(&config_result.config);
    let result = run(terminal, app, config_result, &args);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SNACKBAR DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/snackbar-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SNACKBAR DEBUG SESSION STARTED ===");
}

/// Strict config validation for `--check-config`
fn check_config(
    path: &std::path::Path,
    theme_override: Option<&str>,
) -> Result<(), SnackbarError> {
    let mut config: Config = config::read_config(path)?;
    if let Some(theme) = theme_override {
        config.theme.default_theme = theme.to_string();
    }

    let palette = config.theme.palette()?;
    let icons = config.theme.icons.icon_set()?;

    println!("config: {}", path.display());
    println!("theme: {}", config.theme.default_theme);
    println!("dark: {}", palette.dark);
    println!("icons: {}", icons.name());
    println!(
        "defaults: severity={} timeout_ms={}",
        config.snackbar.severity, config.snackbar.timeout_ms
    );
    println!("primary: {}", palette.primary);
    println!("secondary: {}", palette.secondary);
    println!("surface: {}", palette.surface);
    println!("background: {}", palette.background);
    println!("themes: {}", config.theme.theme_names().join(", "));
    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: ConfigResult,
    args: &Args,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.startup_warnings.insert(0, warning);
    }

    if let Some(message) = &args.message {
        let defaults = app.snackbar.defaults().clone();
        let severity = args
            .severity
            .as_deref()
            .map(Severity::from)
            .unwrap_or(defaults.severity);
        let timeout_ms = args.timeout_ms.unwrap_or(defaults.timeout_ms);
        app.snackbar.notify_with(message.as_str(), severity, timeout_ms);
    }

    // Warnings go last so a bad config is never hidden by the startup message
    app.show_startup_warnings();

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

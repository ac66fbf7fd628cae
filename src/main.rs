//! Stats marquee - an endlessly scrolling strip of company stats.
//!
//! Usage: `stats-marquee [config.json]`

use std::fs::File;
use std::io;
use std::sync::Mutex;

use color_eyre::Result;
use stats_marquee::app::App;
use stats_marquee::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up error handling
    color_eyre::install()?;

    let config = match std::env::args_os().nth(1) {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::new(),
    };

    setup_logging(&config)?;
    tracing::info!(cards = config.cards.len(), speed = config.speed, "starting stats marquee");

    let (width, _) = crossterm::terminal::size()?;
    let mut app = App::new(config, width);

    let _terminal = TerminalGuard::enter()?;
    app.run_with_crossterm().await
}

fn setup_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let default_level = if config.debug_mode { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(File::create(path)?))
        .init();

    Ok(())
}

/// Raw mode, alternate screen and mouse capture, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::event::EnableMouseCapture,
            crossterm::event::EnableFocusChange
        )?;

        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let restored = crossterm::execute!(
            io::stdout(),
            crossterm::event::DisableFocusChange,
            crossterm::event::DisableMouseCapture,
            crossterm::terminal::LeaveAlternateScreen
        )
        .and_then(|_| crossterm::terminal::disable_raw_mode());

        if let Err(err) = restored {
            tracing::error!(error = %err, "failed to restore terminal");
        }
    }
}

//! Portfolio TUI - terminal front end for a personal portfolio
//!
//! Hosts the resume request form and the contact form, with a persisted
//! light/dark theme preference.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging();

    let mut app = App::new()?;
    tracing::info!(endpoint = %app.config.contact_endpoint, "Portfolio initialized");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Give an in-flight message a moment to finish before exiting
    if let Some(outcome) = app.settle_contact_submission(app::SHUTDOWN_GRACE).await {
        tracing::info!(sent = outcome.is_success(), "Contact submission finished at shutdown");
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send logs to a file; stderr would draw over the alternate screen
fn init_logging() -> WorkerGuard {
    let appender = config::log_dir()
        .context("No data directory for the log file")
        .and_then(|dir| config::log_appender(&dir));
    let (writer, guard) = match appender {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            tracing_appender::non_blocking(io::sink())
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    guard
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up a finished contact submission before drawing
        app.poll_contact_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a request is in flight so the result shows promptly
        let poll_duration = if app.has_pending_submission() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    app.quit();
                } else {
                    app.handle_key(key)?;
                }
            }
        }

        // Give the submission task a turn on the runtime
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}

//! Naive tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod surface;
mod ui;

use anyhow::{Context, Result};
use app::{App, AppEvent, Step};
use clap::Parser;
use cli::Cli;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use naive_tictactoe::GameConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output doesn't interfere with the TUI
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(seed = ?cli.seed, "Starting terminal board");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(rng, config)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Single consumer of input and timer events; owns the board.
#[instrument(skip_all)]
async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_input_reader(event_tx.clone());

    terminal.draw(|f| ui::draw(f, &app))?;

    while let Some(event) = event_rx.recv().await {
        match app.handle_event(event) {
            Step::Continue => {}
            Step::Quit => {
                info!("Quitting");
                break;
            }
            Step::ScheduleRestart { round, delay } => {
                debug!(round, ?delay, "Scheduling restart");
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppEvent::Restart { round });
                });
            }
        }
        terminal.draw(|f| ui::draw(f, &app))?;
    }

    Ok(())
}

/// Forwards key presses from a blocking reader thread.
///
/// Plain thread: `event::read` blocks and must not hold up runtime shutdown.
fn spawn_input_reader(tx: mpsc::UnboundedSender<AppEvent>) {
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key.code)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, "Failed to read terminal event");
                    break;
                }
            }
        }
    });
}

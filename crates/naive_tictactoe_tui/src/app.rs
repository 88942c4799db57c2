//! Application state and event handling.

use crate::input::{digit_position, move_cursor};
use crate::surface::TerminalSurface;
use crossterm::event::KeyCode;
use naive_tictactoe::{BoardController, GameConfig, Player, Position};
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Everything the main loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed.
    Key(KeyCode),
    /// The restart timer for `round` fired.
    Restart {
        /// Round the timer was armed for.
        round: u64,
    },
}

/// What the main loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Redraw and keep going.
    Continue,
    /// Arm a restart timer for `round`.
    ScheduleRestart {
        /// Round that just ended.
        round: u64,
        /// How long to wait.
        delay: Duration,
    },
    /// Leave the terminal.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: BoardController<TerminalSurface, StdRng>,
    cursor: Position,
    round: u64,
    status_message: String,
}

const PROMPT: &str = "Your move: arrows + Enter, or 1-9. 'r' restarts, 'q' quits.";

impl App {
    /// Creates the app and lays out the first board.
    pub fn new(rng: StdRng, config: GameConfig) -> Self {
        let mut controller = BoardController::new(TerminalSurface::default(), rng, config);
        controller.run();
        Self {
            controller,
            cursor: Position::Center,
            round: 0,
            status_message: PROMPT.to_string(),
        }
    }

    /// Tiles to draw.
    pub fn surface(&self) -> &TerminalSurface {
        self.controller.surface()
    }

    /// Highlighted tile.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles one event from the main loop.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn handle_event(&mut self, event: AppEvent) -> Step {
        match event {
            AppEvent::Key(KeyCode::Char('q')) | AppEvent::Key(KeyCode::Esc) => Step::Quit,
            AppEvent::Key(KeyCode::Char('r')) => {
                self.restart();
                Step::Continue
            }
            AppEvent::Key(KeyCode::Enter) | AppEvent::Key(KeyCode::Char(' ')) => {
                self.mark(self.cursor)
            }
            AppEvent::Key(KeyCode::Char(c)) => match digit_position(c) {
                Some(position) => {
                    self.cursor = position;
                    self.mark(position)
                }
                None => Step::Continue,
            },
            AppEvent::Key(key) => {
                self.cursor = move_cursor(self.cursor, key);
                Step::Continue
            }
            AppEvent::Restart { round } if round == self.round => {
                self.restart();
                Step::Continue
            }
            AppEvent::Restart { round } => {
                debug!(stale = round, "Ignoring restart for an old round");
                Step::Continue
            }
        }
    }

    fn mark(&mut self, position: Position) -> Step {
        match self.controller.mark_tile(position, Player::Human) {
            Some(outcome) => {
                let delay = self.controller.config().restart_delay();
                self.status_message = format!(
                    "{} New round in {:.1}s.",
                    outcome,
                    delay.as_secs_f32()
                );
                Step::ScheduleRestart {
                    round: self.round,
                    delay,
                }
            }
            None => Step::Continue,
        }
    }

    /// Starts a new round; timers armed for earlier rounds become stale.
    pub fn restart(&mut self) {
        self.round += 1;
        info!(round = self.round, "New round");
        self.controller.restart();
        self.status_message = PROMPT.to_string();
    }
}

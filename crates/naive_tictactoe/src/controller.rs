//! Board controller: moves, the random reply and round end detection.

use crate::config::GameConfig;
use crate::rules::{is_full, winning_line};
use crate::surface::{Highlight, Surface};
use crate::{Board, Player, Position, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How a round ended, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The human completed a triple.
    #[display("You have won!!")]
    HumanWon,
    /// The computer completed a triple.
    #[display("You have lost!")]
    HumanLost,
    /// All nine tiles taken, nobody completed a triple.
    #[display("CATS! Nobody won!")]
    Draw,
}

/// Owns the board and drives one round after another.
///
/// The controller never waits. When a move ends the round,
/// [`mark_tile`](Self::mark_tile) returns the [`Outcome`] and the host is
/// expected to call [`restart`](Self::restart) after
/// [`GameConfig::restart_delay`].
#[derive(Debug)]
pub struct BoardController<S, R> {
    board: Board,
    finished: bool,
    surface: S,
    rng: R,
    config: GameConfig,
}

impl<S: Surface, R: Rng> BoardController<S, R> {
    /// Creates a controller on a cleared surface. Call [`run`](Self::run) to
    /// lay out the tiles.
    pub fn new(surface: S, rng: R, config: GameConfig) -> Self {
        let mut controller = Self {
            board: Board::new(),
            finished: false,
            surface,
            rng,
            config,
        };
        controller.reset();
        controller
    }

    /// Clears the finished flag, the board and the surface.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.finished = false;
        self.board.clear();
        self.surface.clear();
    }

    /// Lays out nine empty tiles.
    ///
    /// Resets first, so a second call never duplicates tiles.
    #[instrument(skip(self))]
    pub fn run(&mut self) {
        self.reset();
        for position in Position::ALL {
            self.surface.add_tile(position);
        }
        debug!("Board ready");
    }

    /// Starts a fresh round. This is what the delayed restart invokes.
    pub fn restart(&mut self) {
        info!("Restarting round");
        self.run();
    }

    /// Places `player`'s mark on `position`.
    ///
    /// Silently ignored when the round is over or the tile is taken. A human
    /// move that leaves the round open is answered by the computer before
    /// this returns. Returns the outcome if the round ended during this call.
    #[instrument(skip(self), fields(finished = self.finished))]
    pub fn mark_tile(&mut self, position: Position, player: Player) -> Option<Outcome> {
        if self.finished || !self.board.is_empty(position) {
            debug!("Ignoring move");
            return None;
        }

        self.board.set(position, Square::Occupied(player));
        let marker = match player {
            Player::Human => self.config.marker_user(),
            Player::Computer => self.config.marker_computer(),
        };
        self.surface.show_marker(position, marker);
        debug!(%position, %player, "Tile marked");

        let outcome = self.check_game();

        if !self.finished && player == Player::Human {
            return self.play_opponent();
        }

        outcome
    }

    /// Marks a uniformly random open tile for the computer.
    fn play_opponent(&mut self) -> Option<Outcome> {
        let open = Position::open_cells(&self.board);
        if open.is_empty() {
            return None;
        }

        let choice = open[self.rng.gen_range(0..open.len())];
        debug!(position = %choice, open = open.len(), "Computer picked tile");
        self.mark_tile(choice, Player::Computer)
    }

    /// Detects a win or draw, applies highlights and logs the outcome.
    fn check_game(&mut self) -> Option<Outcome> {
        let outcome = if self.is_winner(Player::Human) {
            Outcome::HumanWon
        } else if self.is_winner(Player::Computer) {
            Outcome::HumanLost
        } else if self.is_finished() {
            for position in Position::ALL {
                self.surface.highlight(position, Highlight::Lost);
            }
            Outcome::Draw
        } else {
            return None;
        };

        self.finished = true;
        info!(%outcome, "Round over");
        Some(outcome)
    }

    /// Highlights the first triple `player` completed, if any.
    fn is_winner(&mut self, player: Player) -> bool {
        let Some(line) = winning_line(&self.board, player) else {
            return false;
        };

        let highlight = match player {
            Player::Human => Highlight::Won,
            Player::Computer => Highlight::Lost,
        };
        for position in line {
            self.surface.highlight(position, highlight);
        }
        true
    }

    /// True once every tile is taken.
    pub fn is_finished(&self) -> bool {
        is_full(&self.board)
    }

    /// Whether the current round has ended.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The rendering surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

//! Naive tic-tac-toe - a human against a uniformly random opponent.
//!
//! The crate holds everything that does not depend on how the board is
//! drawn. Hosts implement [`Surface`] for their rendering target, feed
//! tile activations into [`BoardController::mark_tile`], and schedule
//! [`BoardController::restart`] whenever a move returns an [`Outcome`].
//!
//! # Example
//!
//! ```
//! use naive_tictactoe::{BoardController, GameConfig, Highlight, Player, Position, Surface};
//! use rand::SeedableRng;
//!
//! struct Headless;
//!
//! impl Surface for Headless {
//!     fn clear(&mut self) {}
//!     fn add_tile(&mut self, _position: Position) {}
//!     fn show_marker(&mut self, _position: Position, _marker: &str) {}
//!     fn highlight(&mut self, _position: Position, _highlight: Highlight) {}
//! }
//!
//! let rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut controller = BoardController::new(Headless, rng, GameConfig::default());
//! controller.run();
//!
//! let outcome = controller.mark_tile(Position::Center, Player::Human);
//! assert!(outcome.is_none());
//! assert_eq!(controller.board().occupied_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod position;
pub mod rules;
mod surface;
mod types;

pub use config::{ConfigError, GameConfig, MARKER_COMPUTER, MARKER_USER, RESTART_DELAY_MS};
pub use controller::{BoardController, Outcome};
pub use position::Position;
pub use surface::{Highlight, Surface};
pub use types::{Board, Player, Square};

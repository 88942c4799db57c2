//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are kept apart from
//! the controller so hosts and tests can query a board directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

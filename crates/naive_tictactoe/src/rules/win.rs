//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first triple fully owned by `player`, in [`LINES`] order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos).player() == Some(player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. The human is checked first.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|player| winning_line(board, *player).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_with(cells: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for (index, player) in cells {
            let pos = Position::from_index(*index).unwrap();
            board.set(pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::Human), (1, Player::Human), (2, Player::Human)]);
        assert_eq!(check_winner(&board), Some(Player::Human));
        assert_eq!(
            winning_line(&board, Player::Human),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(winning_line(&board, Player::Computer), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (2, Player::Computer),
            (4, Player::Computer),
            (6, Player::Computer),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[(0, Player::Human), (1, Player::Human), (2, Player::Computer)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::Human));
            }
            assert_eq!(winning_line(&board, Player::Human), Some(line));
        }
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Top row and left column both complete.
        let board = board_with(&[
            (0, Player::Human),
            (1, Player::Human),
            (2, Player::Human),
            (3, Player::Human),
            (6, Player::Human),
        ]);
        assert_eq!(
            winning_line(&board, Player::Human),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }
}

//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Three positions that win when they hold the same mark.
pub type Line = [Position; 3];

/// Every winning line, in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line holding three identical marks.
///
/// Empty squares never match, so three empty squares are not a win.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|[a, b, c]| {
        let sq = board.get(*a);
        sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X .OX ..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX OXO OXO".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Unreachable grid with two winning lines; the row is reported.
        let board: Board = "OOO O.. O..".parse().unwrap();
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_input_not_mutated() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let before = board.clone();
        let _ = check_winner(&board);
        assert_eq!(board, before);
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from the state
//! machine so they can be evaluated against any grid.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};

use crate::types::{Board, GameStatus};

/// Status implied by the grid alone: win first, then draw.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

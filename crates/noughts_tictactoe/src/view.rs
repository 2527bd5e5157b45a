//! Read-only projection of the game handed to observers.

use crate::position::Position;
use crate::rules::Line;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};

/// Snapshot of the board, turn and status after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Squares in row-major order.
    pub squares: [Square; 9],
    /// Player whose mark goes down next.
    pub to_move: Player,
    /// Outcome so far.
    pub status: GameStatus,
    /// The completed line when the game is won.
    pub winning_line: Option<Line>,
}

impl BoardView {
    /// Square at the given position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// True if `pos` is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }

    /// Rebuilds the board this view was taken from.
    pub fn board(&self) -> Board {
        Board::from_squares(self.squares)
    }

    /// One-line status text.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Next player: {}", self.to_move),
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::Draw => "Draw".to_string(),
        }
    }
}

/// Receives a fresh view every time the game changes.
pub trait BoardObserver {
    /// Called after an accepted move or a reset.
    fn on_change(&mut self, view: &BoardView);
}

impl<F> BoardObserver for F
where
    F: FnMut(&BoardView),
{
    fn on_change(&mut self, view: &BoardView) {
        self(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(status: GameStatus, to_move: Player) -> BoardView {
        BoardView {
            squares: [Square::Empty; 9],
            to_move,
            status,
            winning_line: None,
        }
    }

    #[test]
    fn test_status_line() {
        assert_eq!(
            view(GameStatus::InProgress, Player::O).status_line(),
            "Next player: O"
        );
        assert_eq!(
            view(GameStatus::Won(Player::X), Player::O).status_line(),
            "Winner: X"
        );
        assert_eq!(view(GameStatus::Draw, Player::O).status_line(), "Draw");
    }

    #[test]
    fn test_is_winning() {
        let mut v = view(GameStatus::Won(Player::X), Player::O);
        v.winning_line = Some(crate::rules::LINES[3]);
        assert!(v.is_winning(Position::MiddleLeft));
        assert!(!v.is_winning(Position::Center));
    }
}

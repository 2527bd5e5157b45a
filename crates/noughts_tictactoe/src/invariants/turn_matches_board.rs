//! Turn invariant: the turn flag agrees with the marks on the board.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: X is to move exactly when both players have the same number of marks.
///
/// Since X always moves first and turns strictly alternate, the turn flag
/// is fully determined by the board.
pub struct TurnMatchesBoardInvariant;

impl Invariant<Game> for TurnMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let even = game.board().filled() % 2 == 0;
        let expected = if even { Player::X } else { Player::O };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

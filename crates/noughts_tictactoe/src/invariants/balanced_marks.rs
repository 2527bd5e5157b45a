//! Balanced marks invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_empty_game_holds() {
        assert!(BalancedMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut game = Game::new();
        for index in [4, 0, 8] {
            game.apply_move(index).unwrap();
            assert!(BalancedMarksInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = Game::new();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}

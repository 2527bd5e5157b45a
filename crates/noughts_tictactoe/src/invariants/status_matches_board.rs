//! Status invariant: the cached status is what the rules say about the board.

use super::Invariant;
use crate::game::Game;
use crate::rules;

/// Invariant: the stored status equals the status evaluated from the grid.
pub struct StatusMatchesBoardInvariant;

impl Invariant<Game> for StatusMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.status() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Game status is derived from the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameStatus, Player};

    #[test]
    fn test_holds_through_a_win() {
        let mut game = Game::new();
        for index in [0, 1, 3, 4, 6] {
            game.apply_move(index).unwrap();
            assert!(StatusMatchesBoardInvariant::holds(&game));
        }
        assert_eq!(game.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_forged_status_violates() {
        let mut game = Game::new();
        game.status = GameStatus::Won(Player::O);
        assert!(!StatusMatchesBoardInvariant::holds(&game));
    }
}

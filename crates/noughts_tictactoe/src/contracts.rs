//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::types::Square;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must not be won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player who just moved.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game running, square empty, right player.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: exactly one square went from empty to the mover's mark.
pub struct SingleMarkPlaced;

impl SingleMarkPlaced {
    /// Compares the boards square by square.
    pub fn holds(before: &Game, after: &Game) -> bool {
        let mover = before.to_move();
        let mut changed = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(old, new)| old != new);

        let valid = matches!(
            (changed.next(), changed.next()),
            (Some((Square::Empty, Square::Occupied(p))), None) if *p == mover
        );
        if !valid {
            warn!("Board changed by something other than one new mark");
        }
        valid
    }
}

/// Postcondition: the turn passed to the opponent.
pub struct TurnFlipped;

impl TurnFlipped {
    /// Checks the turn flag against the mover.
    pub fn holds(before: &Game, after: &Game) -> bool {
        let valid = after.to_move() == before.to_move().opponent();
        if !valid {
            warn!(before = %before.to_move(), after = %after.to_move(), "Turn did not flip");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game still in progress
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one new mark, belonging to the mover
/// - Turn flag flipped
/// - All state invariants hold
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let mut descriptions = Vec::new();
        if !SingleMarkPlaced::holds(before, after) {
            descriptions.push("Exactly one empty square receives the mover's mark".to_string());
        }
        if !TurnFlipped::holds(before, after) {
            descriptions.push("Turn passes to the opponent".to_string());
        }
        if let Err(violations) = TicTacToeInvariants::check_all(after) {
            descriptions.extend(violations.into_iter().map(|v| v.description));
        }

        if descriptions.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions.join("; ")
            )))
        }
    }
}

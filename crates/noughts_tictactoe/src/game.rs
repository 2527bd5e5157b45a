//! Board state machine for tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use crate::view::{BoardObserver, BoardView};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the grid, the turn flag and the cached status. Every accepted
/// move is published to subscribed observers as a [`BoardView`].
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            observers: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Snapshot of the current state.
    pub fn view(&self) -> BoardView {
        BoardView {
            squares: *self.board.squares(),
            to_move: self.to_move,
            status: self.status,
            winning_line: rules::winning_line(&self.board),
        }
    }

    /// Registers an observer, called after every accepted move and reset.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's mark at a raw index (0-8).
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the game untouched, when the index is
    /// out of bounds, the game is over, or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the game untouched, when the game is over
    /// or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<Move, MoveError> {
        let action = Move::new(self.to_move, pos);
        if let Err(e) = MoveContract::pre(self, &action) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        let before = cfg!(debug_assertions).then(|| self.snapshot());

        self.board.set(pos, Square::Occupied(action.player));
        self.to_move = action.player.opponent();
        self.status = rules::evaluate(&self.board);

        if let Some(before) = before {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "{:?}", post);
        }

        info!(%action, status = ?self.status, "Move applied");
        if let GameStatus::Won(winner) = self.status {
            info!(%winner, "Game won");
        } else if self.status == GameStatus::Draw {
            info!("Game drawn");
        }

        self.publish();
        Ok(action)
    }

    /// Returns to the initial state, keeping observers.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.publish();
    }

    fn publish(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &mut self.observers {
            observer.on_change(&view);
        }
    }

    /// Observer-free copy used for postcondition checks.
    pub(crate) fn snapshot(&self) -> Game {
        Game {
            board: self.board.clone(),
            to_move: self.to_move,
            status: self.status,
            observers: Vec::new(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("to_move", &self.to_move)
            .field("status", &self.status)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn play(moves: &[usize]) -> Game {
        let mut game = Game::new();
        for &index in moves {
            game.apply_move(index).expect("legal move");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_apply_move_places_current_mark() {
        let mut game = Game::new();
        let action = game.apply_move(4).unwrap();
        assert_eq!(action, Move::new(Player::X, Position::Center));
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_winning_move_still_flips_turn() {
        let game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.to_move(), Player::X);
        assert!(!game.is_over());
    }

    #[test]
    fn test_observers_see_accepted_moves_only() {
        let seen: Rc<RefCell<Vec<BoardView>>> = Rc::default();
        let mut game = Game::new();
        let sink = Rc::clone(&seen);
        game.subscribe(move |view: &BoardView| sink.borrow_mut().push(view.clone()));

        game.apply_move(0).unwrap();
        assert!(game.apply_move(0).is_err());
        game.apply_move(8).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].to_move, Player::O);
        assert_eq!(seen[1].square(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(seen[1], game.view());
    }

    #[test]
    fn test_observers_called_in_order() {
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let mut game = Game::new();
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        game.subscribe(move |_: &BoardView| first.borrow_mut().push("first"));
        game.subscribe(move |_: &BoardView| second.borrow_mut().push("second"));

        game.apply_move(0).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_view_reports_winning_line() {
        let game = play(&[0, 1, 3, 4, 6]);
        let view = game.view();
        assert_eq!(view.status_line(), "Winner: X");
        assert!(view.is_winning(Position::MiddleLeft));
        assert!(!view.is_winning(Position::TopCenter));
    }
}

//! Pure tic-tac-toe game logic.
//!
//! - [`Game`] is the board state machine: it owns the grid and the turn
//!   flag, accepts or rejects moves, and publishes a [`BoardView`] to its
//!   observers after every accepted move.
//! - [`rules`] holds the pure win and draw evaluation over any [`Board`].
//! - [`contracts`] and [`invariants`] state what every accepted move must
//!   preserve; the state machine checks them in debug builds.
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert!(game.apply_move(8).is_err());
//! # Ok::<(), noughts_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{Line, check_winner};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
pub use view::{BoardObserver, BoardView};

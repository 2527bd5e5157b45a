//! Replays a list of cell indices against a fresh game.

use noughts_tictactoe::{BoardView, Game, Move};
use serde::Serialize;
use tracing::{instrument, warn};

/// A move that the game refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    /// Index that was played.
    pub index: usize,
    /// Why it was refused.
    pub reason: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Moves the game accepted, in order.
    pub accepted: Vec<Move>,
    /// Moves the game refused, in order.
    pub rejected: Vec<Rejected>,
    /// Final state.
    pub view: BoardView,
}

impl ReplayReport {
    /// Final board followed by the status line.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.view.board(), self.view.status_line())
    }
}

/// Applies `indices` in order; refused moves are logged and skipped.
#[instrument]
pub fn replay(indices: &[usize]) -> ReplayReport {
    let mut game = Game::new();
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for &index in indices {
        match game.apply_move(index) {
            Ok(action) => accepted.push(action),
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                rejected.push(Rejected {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    ReplayReport {
        accepted,
        rejected,
        view: game.view(),
    }
}

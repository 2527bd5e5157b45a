//! Application state and logic.

use super::input::{Action, move_cursor};
use noughts_tictactoe::{BoardView, Game, Position};
use ratatui::layout::{self, Rect};
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, info};

/// Main application state.
///
/// The app owns the [`Game`] and renders from the latest [`BoardView`]
/// the game published, never from the game directly.
pub struct App {
    game: Game,
    updates: Receiver<BoardView>,
    view: BoardView,
    cursor: Position,
    hint: Option<String>,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        let (tx, updates) = mpsc::channel();
        let mut game = Game::new();
        game.subscribe(move |view: &BoardView| {
            // The receiver lives as long as the app.
            let _ = tx.send(view.clone());
        });
        let view = game.view();

        Self {
            game,
            updates,
            view,
            cursor: Position::Center,
            hint: None,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Latest published view.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line plus any hint about the last action.
    pub fn status_text(&self) -> String {
        let mut status = self.view.status_line();
        if let Some(hint) = &self.hint {
            status.push_str(" | ");
            status.push_str(hint);
        }
        if self.view.status.is_over() {
            status.push_str(" | Press 'r' to restart or 'q' to quit.");
        }
        status
    }

    /// Pulls every view the game published since the last call.
    pub fn sync(&mut self) {
        while let Ok(view) = self.updates.try_recv() {
            self.view = view;
        }
    }

    /// Records where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Applies a user action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Place(pos) => self.select(pos),
            Action::PlaceAtCursor => self.select(self.cursor),
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Places a mark on the cell drawn at the given terminal coordinates.
    pub fn click(&mut self, column: u16, row: u16) {
        let at = layout::Position::new(column, row);
        if let Some(index) = self.cell_areas.iter().position(|area| area.contains(at))
            && let Some(pos) = Position::from_index(index)
        {
            self.cursor = pos;
            self.select(pos);
        }
    }

    fn select(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(action) => self.hint = Some(format!("{} played {}", action.player, pos.label())),
            Err(e) => {
                // The board is unchanged; only the hint says why.
                debug!(error = %e, "Selection ignored");
                self.hint = Some(e.to_string());
            }
        }
    }

    fn restart(&mut self) {
        self.game.reset();
        self.cursor = Position::Center;
        self.hint = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor in the key's direction.
    Cursor(KeyCode),
    /// Place a mark at the given cell.
    Place(Position),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Start a new game.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action, if the key is bound.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(key.code))
        }
        KeyCode::Char('k') => Some(Action::Cursor(KeyCode::Up)),
        KeyCode::Char('j') => Some(Action::Cursor(KeyCode::Down)),
        KeyCode::Char('h') => Some(Action::Cursor(KeyCode::Left)),
        KeyCode::Char('l') => Some(Action::Cursor(KeyCode::Right)),
        KeyCode::Char(c @ '1'..='9') => {
            // Keys 1-9 name cells 0-8.
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Action::Place)
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

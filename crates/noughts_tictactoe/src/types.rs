//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// Any grid can be built this way, reachable or not; the win and draw
    /// rules are defined over arbitrary grids.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, or `None` past the last cell.
    pub fn cell(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Overwrites the square at the given position.
    ///
    /// Only the state machine writes to a board it owns; it never writes
    /// `Square::Empty` over a mark.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

/// Renders the grid as three rows, numbering empty cells 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty cell was found.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(#[error(not(source))] char),
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

/// Parses nine cells written as `X`, `O`, or `.`, `-`, `1`-`9` (empty).
///
/// Whitespace, `|` separators and `-+-+-` row separators are ignored, so
/// `"XXX......"`, `"X|X|X\n.|.|.\n.|.|."` and the board's own `Display`
/// output all parse.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .lines()
            // A row separator is the only line carrying '+'.
            .filter(|line| !line.contains('+'))
            .flat_map(str::chars)
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '1'..='9' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidChar(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self::from_squares(squares))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_with_separators() {
        let plain: Board = "XXO......".parse().unwrap();
        let pretty: Board = "X|X|O\n-|-|-\n.|.|.".parse().unwrap();
        assert_eq!(plain, pretty);
        assert_eq!(plain.count(Player::X), 2);
        assert_eq!(plain.count(Player::O), 1);
        assert_eq!(plain.filled(), 3);
    }

    #[test]
    fn test_display_output_parses_back() {
        for text in ["XOX OXX OXO", "X.. .O. ...", "........."] {
            let board: Board = text.parse().unwrap();
            assert_eq!(board.to_string().parse::<Board>(), Ok(board));
        }
    }

    #[test]
    fn test_dashes_without_plus_are_cells() {
        let board: Board = "---------".parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "XX".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XXZ......".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Z'))
        );
        assert_eq!(
            "XX0......".parse::<Board>(),
            Err(BoardParseError::InvalidChar('0'))
        );
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(8), Some(Square::Empty));
        assert_eq!(board.cell(9), None);
    }
}

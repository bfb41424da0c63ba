//! Common types for Connect Four: players, cells and error enums.

use crate::ai::Difficulty;
use crate::bitboard::BitBoardError;
use crate::game::GameStatus;
use core::fmt;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The opposing side.
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Player name for display.
    pub fn name(self) -> &'static str {
        match self {
            Player::A => "Player A",
            Player::B => "Player B",
        }
    }

    /// Piece glyph used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'X',
            Player::B => 'O',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the piece in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(p) => p.symbol(),
        }
    }
}

/// Errors returned when constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., board too large for the backing integer).
    BitBoardError(BitBoardError),
    /// A board needs at least one row and one column.
    ZeroDimension,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::ZeroDimension => write!(f, "Board must have at least one row and column"),
        }
    }
}

/// Reasons a column is not a legal drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Column index outside `[0, cols)`.
    InvalidColumn(isize),
    /// Column has no open row.
    ColumnFull(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidColumn(col) => write!(f, "Column {} is outside the board", col),
            MoveError::ColumnFull(col) => write!(f, "Column {} is full", col),
        }
    }
}

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Board(BoardError),
    /// Win length must be at least 2 and fit on the board.
    WinLength {
        win_length: usize,
        rows: usize,
        cols: usize,
    },
}

impl From<BoardError> for ConfigError {
    fn from(err: BoardError) -> Self {
        ConfigError::Board(err)
    }
}

impl From<BitBoardError> for ConfigError {
    fn from(err: BitBoardError) -> Self {
        ConfigError::Board(BoardError::from(err))
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Board(e) => write!(f, "Invalid board: {}", e),
            ConfigError::WinLength {
                win_length,
                rows,
                cols,
            } => write!(
                f,
                "Win length {} cannot be used on a {}x{} board",
                win_length, rows, cols
            ),
        }
    }
}

/// Reasons the move selector could not produce a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiError {
    /// Difficulty `None`: no computer opponent is configured.
    Disabled,
    /// The requested tier has no strategy.
    Unimplemented(Difficulty),
    /// Every column is full.
    NoOpenColumn,
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Disabled => write!(f, "No AI opponent is configured"),
            AiError::Unimplemented(d) => write!(f, "Difficulty {:?} is not implemented", d),
            AiError::NoOpenColumn => write!(f, "No open column to play"),
        }
    }
}

/// Precondition failures of the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A move was submitted after the game reached a terminal state.
    GameOver(GameStatus),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver(status) => {
                write!(f, "Game is already over ({}); start a new game", status)
            }
        }
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::*;

    impl std::error::Error for BoardError {}
    impl std::error::Error for MoveError {}
    impl std::error::Error for ConfigError {}
    impl std::error::Error for AiError {}
    impl std::error::Error for SessionError {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn other_player() {
        assert_eq!(Player::A.other(), Player::B);
        assert_eq!(Player::B.other(), Player::A);
    }

    #[test]
    fn cell_owner() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Occupied(Player::B).player(), Some(Player::B));
        assert_eq!(Cell::Occupied(Player::A).symbol(), 'X');
    }

    #[test]
    fn error_display() {
        assert_eq!(
            MoveError::InvalidColumn(-1).to_string(),
            "Column -1 is outside the board"
        );
        assert_eq!(MoveError::ColumnFull(3).to_string(), "Column 3 is full");
        assert_eq!(
            ConfigError::WinLength {
                win_length: 9,
                rows: 6,
                cols: 7
            }
            .to_string(),
            "Win length 9 cannot be used on a 6x7 board"
        );
    }
}

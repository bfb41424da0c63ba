//! Game board state: one occupancy `BitBoard` per player.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Player};
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS};
use alloc::vec::Vec;
use core::fmt;

type BB = BitBoard<u128>;

/// A `rows × cols` grid with row 0 at the bottom.
///
/// Pieces only enter through [`Board::place`], which the game session calls
/// after the validator has produced the landing row, so no piece ever sits
/// above an empty cell in its column.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pieces: [BB; 2],
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create an empty board, checking the size fits the backing bitboards.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::ZeroDimension);
        }
        let empty = BB::try_new(rows, cols)?;
        Ok(Board {
            pieces: [empty, empty],
            rows,
            cols,
        })
    }

    /// The standard 6×7 board.
    pub fn standard() -> Self {
        let empty = BB::new(DEFAULT_ROWS, DEFAULT_COLS);
        Board {
            pieces: [empty, empty],
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (row, col), or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        for player in [Player::A, Player::B] {
            if self.pieces(player).get(row, col).unwrap_or(false) {
                return Some(Cell::Occupied(player));
            }
        }
        Some(Cell::Empty)
    }

    /// Occupancy of a single player.
    pub fn pieces(&self, player: Player) -> BB {
        self.pieces[player.index()]
    }

    /// Occupancy of both players.
    pub fn occupancy(&self) -> BB {
        self.pieces[0] | self.pieces[1]
    }

    /// False for columns outside `[0, cols)`; otherwise true iff the top cell is empty.
    pub fn is_column_open(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col) == Some(Cell::Empty)
    }

    /// First empty row of `col` scanning bottom-up, `None` if full or off the board.
    pub fn lowest_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).find(|&row| self.get(row, col) == Some(Cell::Empty))
    }

    /// Number of pieces stacked in `col`.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.cols {
            return 0;
        }
        let occupied = self.occupancy();
        (0..self.rows)
            .filter(|&row| occupied.get(row, col).unwrap_or(false))
            .count()
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&c| self.is_column_open(c)).collect()
    }

    /// Unconditional write of one cell. Bounds and emptiness are established
    /// by the validator before the session calls this.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(self.get(row, col), Some(Cell::Empty));
        if self.pieces[player.index()].set(row, col).is_err() {
            log::error!("placement at ({}, {}) is off the board", row, col);
        }
    }

    pub(crate) fn clear(&mut self) {
        for bb in self.pieces.iter_mut() {
            bb.clear_all();
        }
    }

    /// Returns `true` when every cell holds a piece.
    pub fn is_full(&self) -> bool {
        self.occupancy().is_full()
    }

    /// Number of non-empty cells.
    pub fn piece_count(&self) -> usize {
        self.occupancy().count_ones()
    }

    /// Cells row by row, top row first, as a renderer would draw them.
    pub fn rows_top_down(&self) -> Vec<Vec<Cell>> {
        (0..self.rows)
            .rev()
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.get(r, c).unwrap_or(Cell::Empty))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_top_down() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        for c in 0..self.cols {
            if c > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", (c + 1) % 10)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {}x{},\n  a: {:?},\n  b: {:?}\n}}",
            self.rows, self.cols, self.pieces[0], self.pieces[1]
        )
    }
}

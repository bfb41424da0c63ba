//! Win and tie detection.
//!
//! Every check scans the whole board: each starting cell where a run fits is
//! examined along all four axes, so the result never depends on which piece
//! was placed last.

use crate::board::Board;
use crate::common::{Cell, Player};
use crate::config::DEFAULT_WIN_LENGTH;

/// Direction of a line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Bottom to top along a column.
    Vertical,
    /// Towards the upper right (↗).
    DiagonalUp,
    /// Towards the lower right (↘).
    DiagonalDown,
}

impl Axis {
    /// Scan order used by the detector and the move selector.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalUp,
        Axis::DiagonalDown,
    ];

    /// `(row, col)` step between consecutive cells.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalUp => (1, 1),
            Axis::DiagonalDown => (-1, 1),
        }
    }
}

/// `length` consecutive cells starting at (`row`, `col`) along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub row: usize,
    pub col: usize,
    pub axis: Axis,
    pub length: usize,
}

impl Line {
    fn offset(&self, k: usize) -> (isize, isize) {
        let (dr, dc) = self.axis.step();
        let k = k as isize;
        (self.row as isize + dr * k, self.col as isize + dc * k)
    }

    /// True when every cell of the line lies on a `rows × cols` board.
    pub fn fits(&self, rows: usize, cols: usize) -> bool {
        if self.length == 0 || self.length > rows.max(cols) {
            return false;
        }
        let (er, ec) = self.offset(self.length - 1);
        (0..rows as isize).contains(&er)
            && (0..cols as isize).contains(&ec)
            && self.row < rows
            && self.col < cols
    }

    /// Cells of the line in order. Only meaningful for lines that fit.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| {
            let (r, c) = self.offset(k);
            (r as usize, c as usize)
        })
    }
}

/// All lines of `length` along `axis` that fit on the board, column by
/// column, bottom row first within a column.
pub(crate) fn windows(board: &Board, axis: Axis, length: usize) -> impl Iterator<Item = Line> {
    let (rows, cols) = (board.rows(), board.cols());
    (0..cols)
        .flat_map(move |col| {
            (0..rows).map(move |row| Line {
                row,
                col,
                axis,
                length,
            })
        })
        .filter(move |line| line.fits(rows, cols))
}

/// First line of `run` pieces owned by `player`, in scan order.
pub fn winning_line(board: &Board, player: Player, run: usize) -> Option<Line> {
    let owned = Some(Cell::Occupied(player));
    Axis::ALL.iter().find_map(|&axis| {
        windows(board, axis, run).find(|line| line.cells().all(|(r, c)| board.get(r, c) == owned))
    })
}

/// Whether `player` has `run` consecutive pieces on any axis.
pub fn has_run(board: &Board, player: Player, run: usize) -> bool {
    winning_line(board, player, run).is_some()
}

/// Standard four-in-a-row check.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    has_run(board, player, DEFAULT_WIN_LENGTH)
}

/// Full board with no run for either player.
pub fn is_tie(board: &Board, run: usize) -> bool {
    board.is_full() && !has_run(board, Player::A, run) && !has_run(board, Player::B, run)
}

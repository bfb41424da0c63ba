//! Move legality: the single gate every drop passes through.

use crate::board::Board;
use crate::common::MoveError;

/// Landing row for a drop into `col`, or the reason the drop is illegal.
/// Pure; the board is not touched.
pub fn validate(board: &Board, col: isize) -> Result<usize, MoveError> {
    let index = usize::try_from(col).map_err(|_| MoveError::InvalidColumn(col))?;
    if index >= board.cols() {
        return Err(MoveError::InvalidColumn(col));
    }
    if !board.is_column_open(index) {
        return Err(MoveError::ColumnFull(index));
    }
    board
        .lowest_open_row(index)
        .ok_or(MoveError::ColumnFull(index))
}

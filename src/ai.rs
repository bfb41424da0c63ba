// Heuristic column selection for the computer opponent.
// Uses no_std and only allocates the list of open columns.

use crate::{
    board::Board,
    common::{AiError, Cell, Player},
    rules::{windows, Axis, Line},
    validator::validate,
};
use rand::Rng;

/// Strategy tier of the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// No computer opponent; both sides are human.
    #[default]
    None,
    Easy,
    Medium,
    /// Reserved tier without a strategy.
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::None => "none",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl core::str::FromStr for Difficulty {
    type Err = alloc::string::String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Difficulty::None),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(alloc::format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Pick a column for `ai` to play. The column is passed through the move
/// validator before it is returned, so it is always open.
pub fn choose_column<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    opponent: Player,
    run: usize,
    rng: &mut R,
) -> Result<usize, AiError> {
    let col = match difficulty {
        Difficulty::None => return Err(AiError::Disabled),
        Difficulty::Hard => return Err(AiError::Unimplemented(Difficulty::Hard)),
        Difficulty::Easy => random_open_column(board, rng),
        Difficulty::Medium => medium_column(board, opponent, run, rng),
    }
    .ok_or(AiError::NoOpenColumn)?;

    validate(board, col as isize).map_err(|_| AiError::NoOpenColumn)?;
    log::debug!("{} ({}) chose column {}", ai, difficulty.name(), col);
    Ok(col)
}

/// Uniformly random open column, `None` on a full board.
pub fn random_open_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let open = board.open_columns();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Half the time play like Easy; otherwise fill the first completable gap in
/// `target`'s lines, falling back to a random open column.
fn medium_column<R: Rng + ?Sized>(
    board: &Board,
    target: Player,
    run: usize,
    rng: &mut R,
) -> Option<usize> {
    if rng.random_bool(0.5) {
        return random_open_column(board, rng);
    }
    gap_fill_column(board, target, run).or_else(|| random_open_column(board, rng))
}

/// Column whose next drop fills the single empty cell of a line holding
/// `run - 1` of `target`'s pieces.
///
/// Axes are scanned horizontal, vertical, diagonal ↗, diagonal ↘; within an
/// axis lines are visited column by column from the left, bottom row first.
/// A gap only counts when it is the landing cell of its column.
pub fn gap_fill_column(board: &Board, target: Player, run: usize) -> Option<usize> {
    Axis::ALL.iter().find_map(|&axis| {
        windows(board, axis, run).find_map(|line| sole_playable_gap(board, &line, target))
    })
}

fn sole_playable_gap(board: &Board, line: &Line, target: Player) -> Option<usize> {
    let mut gap = None;
    for (r, c) in line.cells() {
        match board.get(r, c)? {
            Cell::Occupied(p) if p == target => {}
            Cell::Empty if gap.is_none() => gap = Some((r, c)),
            _ => return None,
        }
    }
    let (row, col) = gap?;
    (board.lowest_open_row(col) == Some(row)).then_some(col)
}

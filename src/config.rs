use crate::ai::Difficulty;
use crate::bitboard::BitBoard;
use crate::common::{BoardError, ConfigError, Player};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Largest board the `u128` occupancy bitboards can hold.
pub const MAX_CELLS: usize = 128;

/// Parameters consumed when a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
    pub difficulty: Difficulty,
    pub starting_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
            difficulty: Difficulty::None,
            starting_player: Player::A,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Check that the board fits the bitboards and that a run can be made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardError::ZeroDimension.into());
        }
        BitBoard::<u128>::try_new(self.rows, self.cols)?;
        if self.win_length < 2 || self.win_length > self.rows.max(self.cols) {
            return Err(ConfigError::WinLength {
                win_length: self.win_length,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::BitBoardError;

    #[test]
    fn default_is_standard_board() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols, config.win_length), (6, 7, 4));
        assert_eq!(config.starting_player, Player::A);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_dimension() {
        let config = GameConfig::default().with_size(0, 7);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Board(BoardError::ZeroDimension))
        );
    }

    #[test]
    fn rejects_oversized_board() {
        let config = GameConfig::default().with_size(12, 12);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Board(BoardError::BitBoardError(
                BitBoardError::SizeTooLarge {
                    cells: 144,
                    capacity: MAX_CELLS
                }
            )))
        );
    }

    #[test]
    fn win_length_must_fit() {
        assert!(GameConfig::default().with_win_length(7).validate().is_ok());
        assert!(matches!(
            GameConfig::default().with_win_length(8).validate(),
            Err(ConfigError::WinLength { win_length: 8, .. })
        ));
        assert!(GameConfig::default().with_win_length(1).validate().is_err());
    }
}

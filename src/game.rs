use crate::{
    board::Board,
    common::{Cell, ConfigError, MoveError, Player, SessionError},
    config::GameConfig,
    history::{History, Move},
    rules::{self, Line},
    validator::validate,
};
use alloc::vec::Vec;
use core::fmt;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Waiting for the given player to move.
    InProgress(Player),
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress(p) => write!(f, "{} to move", p),
            GameStatus::Won(p) => write!(f, "{} wins", p),
            GameStatus::Tied => write!(f, "tie"),
        }
    }
}

/// Result of submitting a column for the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece was committed; `status` is the state after the move.
    Accepted { mv: Move, status: GameStatus },
    /// Nothing changed and the same player is still to move.
    Rejected { reason: MoveError, status: GameStatus },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    pub fn status(&self) -> GameStatus {
        match *self {
            MoveOutcome::Accepted { status, .. } | MoveOutcome::Rejected { status, .. } => status,
        }
    }
}

/// Serializable picture of a session for renderers and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Top row first.
    pub cells: Vec<Vec<Cell>>,
    pub history: Vec<Move>,
    pub status: GameStatus,
}

/// One game: the board, its move ledger and the turn state machine.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    history: History,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with the given configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols)?;
        Ok(Self {
            config,
            board,
            history: History::new(),
            status: GameStatus::InProgress(config.starting_player),
        })
    }

    /// Standard 6×7 four-in-a-row game with Player A moving first.
    pub fn standard() -> Self {
        Self {
            config: GameConfig::default(),
            board: Board::standard(),
            history: History::new(),
            status: GameStatus::InProgress(Player::A),
        }
    }

    /// Reset board and ledger, keeping the configuration.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.history.clear();
        self.status = GameStatus::InProgress(self.config.starting_player);
        log::info!("new game, {} moves first", self.config.starting_player);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Ledger entries in chronological order.
    pub fn history_entries(&self) -> &[Move] {
        self.history.entries()
    }

    /// Player to move, `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress(p) => Some(p),
            _ => None,
        }
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// The completed run of the winner, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        let winner = self.status.winner()?;
        rules::winning_line(&self.board, winner, self.config.win_length)
    }

    /// Drop a piece for the active player into `column`.
    ///
    /// Illegal columns are reported as [`MoveOutcome::Rejected`] with no
    /// state change. Submitting after the game has ended is a precondition
    /// failure.
    pub fn submit_move(&mut self, column: isize) -> Result<MoveOutcome, SessionError> {
        let player = match self.status {
            GameStatus::InProgress(p) => p,
            terminal => return Err(SessionError::GameOver(terminal)),
        };

        let row = match validate(&self.board, column) {
            Ok(row) => row,
            Err(reason) => {
                log::debug!("{} rejected: {}", player, reason);
                return Ok(MoveOutcome::Rejected {
                    reason,
                    status: self.status,
                });
            }
        };
        let col = column as usize;

        self.board.place(row, col, player);
        let mv = self.history.append(player, row, col);
        log::debug!("#{} {} -> ({}, {})", mv.seq, player, row, col);

        let run = self.config.win_length;
        self.status = if rules::has_run(&self.board, player, run) {
            log::info!("{} wins after {} moves", player, mv.seq);
            GameStatus::Won(player)
        } else if rules::is_tie(&self.board, run) {
            log::info!("tie after {} moves", mv.seq);
            GameStatus::Tied
        } else {
            GameStatus::InProgress(player.other())
        };

        Ok(MoveOutcome::Accepted {
            mv,
            status: self.status,
        })
    }

    /// Generate a snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            cells: self.board.rows_top_down(),
            history: self.history.entries().to_vec(),
            status: self.status,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;

    fn play(session: &mut GameSession, cols: &[isize]) -> MoveOutcome {
        let mut last = None;
        for &c in cols {
            last = Some(session.submit_move(c).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn initial_state() {
        let session = GameSession::standard();
        assert_eq!(session.status(), GameStatus::InProgress(Player::A));
        assert_eq!(session.active_player(), Some(Player::A));
        assert!(session.history_entries().is_empty());
        assert_eq!(session.board().piece_count(), 0);
    }

    #[test]
    fn turns_alternate() {
        let mut session = GameSession::standard();
        let outcome = session.submit_move(3).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Accepted {
                mv: Move {
                    player: Player::A,
                    row: 0,
                    col: 3,
                    seq: 1
                },
                status: GameStatus::InProgress(Player::B)
            }
        );
        assert_eq!(session.board().get(0, 3), Some(Cell::Occupied(Player::A)));
        session.submit_move(3).unwrap();
        assert_eq!(session.board().get(1, 3), Some(Cell::Occupied(Player::B)));
        assert_eq!(session.active_player(), Some(Player::A));
    }

    #[test]
    fn rejected_move_keeps_turn() {
        let mut session = GameSession::standard();
        let outcome = session.submit_move(-1).unwrap();
        assert!(!outcome.is_accepted());
        assert_eq!(
            outcome,
            MoveOutcome::Rejected {
                reason: MoveError::InvalidColumn(-1),
                status: GameStatus::InProgress(Player::A)
            }
        );
        assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn win_ends_the_game() {
        let mut session = GameSession::standard();
        let outcome = play(&mut session, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(outcome.status(), GameStatus::Won(Player::A));
        assert_eq!(session.active_player(), None);
        assert_eq!(session.winning_line().map(|l| (l.row, l.col)), Some((0, 0)));
        assert_eq!(
            session.submit_move(4),
            Err(SessionError::GameOver(GameStatus::Won(Player::A)))
        );
        assert_eq!(session.move_count(), 7);
    }

    #[test]
    fn win_length_follows_config() {
        let config = GameConfig::default().with_size(3, 3).with_win_length(3);
        let mut session = GameSession::new(config).unwrap();
        let outcome = play(&mut session, &[0, 0, 1, 1, 2]);
        assert_eq!(outcome.status(), GameStatus::Won(Player::A));
    }

    #[test]
    fn starting_player_is_configurable() {
        let config = GameConfig::default()
            .with_starting_player(Player::B)
            .with_difficulty(Difficulty::Easy);
        let mut session = GameSession::new(config).unwrap();
        assert_eq!(session.active_player(), Some(Player::B));
        session.submit_move(0).unwrap();
        session.new_game();
        assert_eq!(session.active_player(), Some(Player::B));
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.board().piece_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::default().with_win_length(0);
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut session = GameSession::standard();
        play(&mut session, &[6, 6]);
        let snap = session.snapshot();
        assert_eq!((snap.rows, snap.cols), (6, 7));
        assert_eq!(snap.cells[5][6], Cell::Occupied(Player::A));
        assert_eq!(snap.cells[4][6], Cell::Occupied(Player::B));
        assert_eq!(snap.history.len(), 2);
        assert_eq!(snap.status, GameStatus::InProgress(Player::A));
    }
}

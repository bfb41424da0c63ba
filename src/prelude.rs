//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_column, validate, Agent, AiAgent, Board, Cell, Difficulty, GameConfig, GameSession,
    GameStatus, Move, MoveError, MoveOutcome, Player, SessionError,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render_history, render_session, CliAgent};

//! Append-only move ledger.

use crate::common::Player;
use alloc::vec::Vec;

/// A committed drop. Sequence numbers start at 1 and follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub player: Player,
    pub row: usize,
    pub col: usize,
    pub seq: usize,
}

/// Chronological record of every committed move in a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<Move>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number the next appended move will carry.
    pub fn next_seq(&self) -> usize {
        self.entries.len() + 1
    }

    /// Record a drop and return the stored move.
    pub(crate) fn append(&mut self, player: Player, row: usize, col: usize) -> Move {
        let mv = Move {
            player,
            row,
            col,
            seq: self.next_seq(),
        };
        self.entries.push(mv);
        mv
    }

    /// Read-only view in chronological order.
    pub fn entries(&self) -> &[Move] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Move> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves made by one player, in order.
    pub fn by_player(&self, player: Player) -> impl Iterator<Item = &Move> + '_ {
        self.entries.iter().filter(move |m| m.player == player)
    }

    /// Only called when a new game starts.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

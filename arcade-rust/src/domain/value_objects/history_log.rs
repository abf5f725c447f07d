//! HistoryLog - append-only record of the human's moves in a session

use serde::Serialize;

use crate::domain::entities::Move;

/// Ordered log of human moves, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryLog {
    moves: Vec<Move>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a move (unconditional, in call order)
    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Most recent `n` moves in chronological order (fewer if the log is shorter)
    pub fn last_n(&self, n: usize) -> &[Move] {
        let start = self.moves.len().saturating_sub(n);
        &self.moves[start..]
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Only a session reset may clear the log
    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }
}

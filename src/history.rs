use thiserror::Error;

use crate::score::{ScoreState, Side};

/// Returned when undo is requested with nothing to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nothing to undo")]
pub struct EmptyHistory;

/// Full score as it stood right before `scored_by` was awarded a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub scored_by: Side,
    pub before: ScoreState,
}

/// Chronological list of snapshots, one per awarded point.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<Snapshot>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Must be called before `state` is mutated for the point.
    pub fn record_before(&mut self, side: Side, state: &ScoreState) {
        self.entries.push(Snapshot {
            scored_by: side,
            before: *state,
        });
    }

    pub fn pop(&mut self) -> Result<Snapshot, EmptyHistory> {
        self.entries.pop().ok_or(EmptyHistory)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

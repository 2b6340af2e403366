//! Outcomes reported by a session and the sinks that react to them.

use std::fmt;

use crate::score::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PointScored(Side),
    GameWon(Side),
    SetWon(Side),
    UndoToZero,
    UndoPartial,
    UndoEmpty,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PointScored(side) => write!(f, "point {}", side),
            Outcome::GameWon(side) => write!(f, "game {}", side),
            Outcome::SetWon(side) => write!(f, "set {}", side),
            Outcome::UndoToZero => write!(f, "undo: back to 0-0"),
            Outcome::UndoPartial => write!(f, "undo"),
            Outcome::UndoEmpty => write!(f, "nothing to undo"),
        }
    }
}

/// Receives every outcome produced by the front end driving a session.
pub trait FeedbackSink {
    fn notify(&mut self, outcome: Outcome);
}

/// Writes each outcome to the tracing log.
#[derive(Debug, Default)]
pub struct TracingFeedback;

impl FeedbackSink for TracingFeedback {
    fn notify(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::UndoEmpty => tracing::warn!("Feedback: {}", outcome),
            _ => tracing::info!("Feedback: {}", outcome),
        }
    }
}

/// Keeps every outcome in order.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    outcomes: Vec<Outcome>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn last(&self) -> Option<Outcome> {
        self.outcomes.last().copied()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn notify(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }
}

impl<T: FeedbackSink + ?Sized> FeedbackSink for Box<T> {
    fn notify(&mut self, outcome: Outcome) {
        (**self).notify(outcome);
    }
}

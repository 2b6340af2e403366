//! A single match: the live score plus the history needed to undo it.

use serde::Serialize;

use crate::{
    feedback::Outcome,
    history::{EmptyHistory, HistoryLog},
    score::{PerSide, PointLabel, PointOutcome, ScoreState, Side},
};

/// State restored by a successful undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restored {
    pub state: ScoreState,
    /// Side whose point was taken back.
    pub undone: Side,
}

impl Restored {
    pub fn is_back_to_zero(&self) -> bool {
        self.state.is_zero()
    }
}

/// Serialisable view of the current score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub sets: PerSide<u32>,
    pub games: PerSide<u32>,
    pub points: PerSide<u32>,
    pub labels: PerSide<PointLabel>,
    pub history_len: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: ScoreState,
    history: HistoryLog,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    /// Side whose point the next undo would take back.
    pub fn last_scorer(&self) -> Option<Side> {
        self.history.last().map(|snapshot| snapshot.scored_by)
    }

    pub fn award_point(&mut self, side: Side) -> Outcome {
        self.history.record_before(side, &self.state);

        let outcome = match self.state.award_point(side) {
            PointOutcome::Point => Outcome::PointScored(side),
            PointOutcome::Game => Outcome::GameWon(side),
            PointOutcome::Set => Outcome::SetWon(side),
        };
        tracing::debug!("Point {} -> {:?}", side, self.state);
        outcome
    }

    /// Reverts the most recent `award_point`, cascades included.
    pub fn undo_last(&mut self) -> Result<Restored, EmptyHistory> {
        let snapshot = self.history.pop()?;
        self.state = snapshot.before;
        tracing::debug!("Undo point {} -> {:?}", snapshot.scored_by, self.state);

        Ok(Restored {
            state: self.state,
            undone: snapshot.scored_by,
        })
    }

    pub fn point_label(&self, side: Side) -> PointLabel {
        self.state.point_label(side)
    }

    pub fn is_history_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn new_match(&mut self) {
        self.state = ScoreState::new();
        self.history.clear();
    }

    pub fn undo_outcome(result: &Result<Restored, EmptyHistory>) -> Outcome {
        match result {
            Ok(restored) if restored.is_back_to_zero() => Outcome::UndoToZero,
            Ok(_) => Outcome::UndoPartial,
            Err(EmptyHistory) => Outcome::UndoEmpty,
        }
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            sets: self.state.sets,
            games: self.state.games,
            points: self.state.points,
            labels: PerSide::new(self.point_label(Side::A), self.point_label(Side::B)),
            history_len: self.history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn play(session: &mut Session, seq: &[Side]) {
        for &side in seq {
            session.award_point(side);
        }
    }

    fn random_side(rng: &mut StdRng) -> Side {
        if rng.gen_bool(0.5) { Side::A } else { Side::B }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_history_empty());
        assert!(session.state().is_zero());
        assert_eq!(session.point_label(Side::A), PointLabel::Love);
    }

    #[test]
    fn test_award_point_reports_cascade() {
        let mut session = Session::new();
        play(&mut session, &[Side::A, Side::A, Side::A]);
        assert_eq!(session.award_point(Side::A), Outcome::GameWon(Side::A));

        for _ in 0..4 {
            play(&mut session, &[Side::A, Side::A, Side::A, Side::A]);
        }
        play(&mut session, &[Side::A, Side::A, Side::A]);
        assert_eq!(session.award_point(Side::A), Outcome::SetWon(Side::A));
        assert_eq!(session.award_point(Side::B), Outcome::PointScored(Side::B));
    }

    #[test]
    fn test_undo_on_empty_never_mutates() {
        let mut session = Session::new();
        for _ in 0..5 {
            let result = session.undo_last();
            assert_eq!(result, Err(EmptyHistory));
            assert_eq!(Session::undo_outcome(&result), Outcome::UndoEmpty);
        }
        assert!(session.state().is_zero());
        assert!(session.is_history_empty());
    }

    #[test]
    fn test_undo_restores_set_win() {
        let mut session = Session::new();
        for _ in 0..5 {
            play(&mut session, &[Side::A; 4]);
        }
        play(&mut session, &[Side::A; 3]);
        let before = *session.state();
        assert_eq!(before.games, PerSide::new(5, 0));
        assert_eq!(before.points, PerSide::new(3, 0));

        session.award_point(Side::A);
        assert_eq!(session.state().sets, PerSide::new(1, 0));

        let restored = session.undo_last().unwrap();
        assert_eq!(restored.state, before);
        assert_eq!(restored.undone, Side::A);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_undo_outcome_distinguishes_zero() {
        let mut session = Session::new();
        play(&mut session, &[Side::B, Side::A]);

        let result = session.undo_last();
        assert_eq!(Session::undo_outcome(&result), Outcome::UndoPartial);

        let result = session.undo_last();
        assert!(result.unwrap().is_back_to_zero());
        assert_eq!(Session::undo_outcome(&result), Outcome::UndoToZero);
    }

    #[test]
    fn test_history_grows_and_shrinks_by_one() {
        let mut session = Session::new();
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=60 {
            session.award_point(random_side(&mut rng));
            assert_eq!(session.history_len(), n);
        }
        for n in (0..60).rev() {
            session.undo_last().unwrap();
            assert_eq!(session.history_len(), n);
        }
        assert!(session.state().is_zero());
    }

    #[test]
    fn test_random_play_keeps_invariants_and_undo_is_exact() {
        let mut rng = StdRng::seed_from_u64(2025);
        let mut session = Session::new();

        for _ in 0..2000 {
            let before = *session.state();
            let side = random_side(&mut rng);
            session.award_point(side);
            assert!(session.state().is_quiescent(), "{:?}", session.state());

            // Every tenth point, check the round trip
            if rng.gen_range(0..10) == 0 {
                let restored = session.undo_last().unwrap();
                assert_eq!(restored.state, before);
                session.award_point(side);
            }
        }
    }

    #[test]
    fn test_new_match_clears_everything() {
        let mut session = Session::new();
        play(&mut session, &[Side::A, Side::B, Side::B]);
        session.new_match();
        assert!(session.state().is_zero());
        assert!(session.is_history_empty());
        assert_eq!(session.undo_last(), Err(EmptyHistory));
    }

    #[test]
    fn test_summary_serializes() {
        let mut session = Session::new();
        play(&mut session, &[Side::A, Side::A, Side::A, Side::B, Side::B, Side::B, Side::A]);

        let summary = session.summary();
        assert_eq!(summary.labels, PerSide::new(PointLabel::Advantage, PointLabel::Forty));
        assert_eq!(summary.history_len, 7);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["points"]["a"], 4);
        assert_eq!(json["labels"]["a"], "AD");
        assert_eq!(json["labels"]["b"], "40");
    }

    #[test]
    fn test_summary_labels_match_display() {
        let mut session = Session::new();
        session.award_point(Side::B);

        let json = serde_json::to_value(session.summary()).unwrap();
        assert_eq!(json["labels"]["a"], "0");
        assert_eq!(json["labels"]["b"], "15");
        assert_eq!(json["labels"]["b"], session.point_label(Side::B).to_string());
    }

    #[test]
    fn test_last_scorer_follows_history() {
        let mut session = Session::new();
        assert_eq!(session.last_scorer(), None);

        session.award_point(Side::A);
        session.award_point(Side::B);
        assert_eq!(session.last_scorer(), Some(Side::B));

        session.undo_last().unwrap();
        assert_eq!(session.last_scorer(), Some(Side::A));
    }
}

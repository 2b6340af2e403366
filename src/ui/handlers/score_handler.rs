//! Score changes driven from the UI.

use crate::{feedback::Outcome, score::Side, session::Session};

use super::super::app::App;

/// Applies one scoring action to the session and reports its outcome.
pub struct ScoreHandler<'a> {
    app: &'a mut App,
}

impl<'a> ScoreHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn score(&mut self, side: Side) {
        let outcome = self.app.session.award_point(side);
        let name = self.app.team_names[side].clone();

        match outcome {
            Outcome::GameWon(_) => self.app.log(format!("Game to {}", name)),
            Outcome::SetWon(_) => self.app.log(format!("Set to {}", name)),
            _ => self.app.log(format!(
                "Point {} ({}-{})",
                name,
                self.app.session.point_label(Side::A),
                self.app.session.point_label(Side::B)
            )),
        }

        self.report(outcome);
    }

    pub fn undo(&mut self) {
        let result = self.app.session.undo_last();
        let outcome = Session::undo_outcome(&result);

        match result {
            Ok(restored) => {
                let name = self.app.team_names[restored.undone].clone();
                self.app.log(format!("Undid point for {}", name));
            }
            Err(err) => self.app.log(format!("Undo ignored: {}", err)),
        }

        self.report(outcome);
    }

    pub fn new_match(&mut self) {
        self.app.session.new_match();
        self.app.last_outcome = None;
        self.app.started_at = chrono::Local::now();
        self.app.log("New match started");
    }

    fn report(&mut self, outcome: Outcome) {
        self.app.feedback.notify(outcome);
        self.app.last_outcome = Some(outcome);
    }
}

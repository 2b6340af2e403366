//! Non-interactive driving of a session: scripted sequences and random play.

use anyhow::Result;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::convert::TryFrom;

use crate::{
    feedback::FeedbackSink,
    score::{PerSide, Side},
    session::{ScoreSummary, Session},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Point(Side),
    Undo,
}

impl TryFrom<char> for Command {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'U' => Ok(Command::Undo),
            other => Side::try_from(other).map(Command::Point).map_err(|_| value),
        }
    }
}

/// Parse a sequence like "AAB U". Whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            Command::try_from(c).map_err(|bad| anyhow::anyhow!("invalid script character: {}", bad))
        })
        .collect()
}

pub fn apply(session: &mut Session, command: Command, sink: &mut impl FeedbackSink) {
    let outcome = match command {
        Command::Point(side) => session.award_point(side),
        Command::Undo => Session::undo_outcome(&session.undo_last()),
    };
    sink.notify(outcome);
}

pub fn run_script(session: &mut Session, commands: &[Command], sink: &mut impl FeedbackSink) {
    for &command in commands {
        apply(session, command, sink);
    }
}

/// Award `points` points, each won by either side with equal chance.
pub fn simulate(
    session: &mut Session,
    points: usize,
    seed: Option<u64>,
    sink: &mut impl FeedbackSink,
) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..points {
        let side = if rng.gen_bool(0.5) { Side::A } else { Side::B };
        apply(session, Command::Point(side), sink);
    }
}

/// Plain text scoreboard, one line per side.
pub fn render_text(summary: &ScoreSummary, names: &PerSide<String>) -> String {
    let width = names.a.len().max(names.b.len());
    [Side::A, Side::B]
        .into_iter()
        .map(|side| {
            format!(
                "{:<width$}  sets {}  games {}  points {}",
                names[side],
                summary.sets[side],
                summary.games[side],
                summary.labels[side],
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Outcome, RecordingFeedback};

    #[test]
    fn test_parse_script() {
        let commands = parse_script("ab U\tB").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Point(Side::A),
                Command::Point(Side::B),
                Command::Undo,
                Command::Point(Side::B),
            ]
        );
    }

    #[test]
    fn test_parse_script_rejects_bad_char() {
        let err = parse_script("AAX").unwrap_err();
        assert!(err.to_string().contains('X'));
    }

    #[test]
    fn test_run_script_reports_outcomes() {
        let mut session = Session::new();
        let mut sink = RecordingFeedback::new();
        let commands = parse_script("UAAAAUUUUU").unwrap();

        run_script(&mut session, &commands, &mut sink);

        assert_eq!(
            sink.outcomes(),
            &[
                Outcome::UndoEmpty,
                Outcome::PointScored(Side::A),
                Outcome::PointScored(Side::A),
                Outcome::PointScored(Side::A),
                Outcome::GameWon(Side::A),
                Outcome::UndoPartial,
                Outcome::UndoPartial,
                Outcome::UndoPartial,
                Outcome::UndoToZero,
                Outcome::UndoEmpty,
            ]
        );
        assert!(session.state().is_zero());
    }

    #[test]
    fn test_simulate_is_deterministic_with_seed() {
        let mut first = Session::new();
        let mut second = Session::new();
        let mut sink = RecordingFeedback::new();

        simulate(&mut first, 300, Some(42), &mut sink);
        simulate(&mut second, 300, Some(42), &mut RecordingFeedback::new());

        assert_eq!(first.state(), second.state());
        assert_eq!(first.history_len(), 300);
        assert_eq!(sink.outcomes().len(), 300);
        assert!(first.state().is_quiescent());
    }

    #[test]
    fn test_render_text() {
        let mut session = Session::new();
        run_script(
            &mut session,
            &parse_script("AAAB").unwrap(),
            &mut RecordingFeedback::new(),
        );
        let names = PerSide::new("Us".to_string(), "Them".to_string());

        let text = render_text(&session.summary(), &names);
        assert_eq!(
            text,
            "Us    sets 0  games 0  points 40\nThem  sets 0  games 0  points 15"
        );
    }
}

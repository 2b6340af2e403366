use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    feedback::{FeedbackSink, Outcome},
    score::PerSide,
    session::Session,
};

use super::types::LogBuffer;

/// Main application state container.
pub struct App {
    pub(in crate::ui) session: Session,
    pub(in crate::ui) team_names: PerSide<String>,
    pub(in crate::ui) feedback: Box<dyn FeedbackSink>,
    pub(in crate::ui) last_outcome: Option<Outcome>,
    pub(in crate::ui) started_at: DateTime<Local>,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(
        team_names: PerSide<String>,
        logs: LogBuffer,
        feedback: Box<dyn FeedbackSink>,
    ) -> Self {
        Self {
            session: Session::new(),
            team_names,
            feedback,
            last_outcome: None,
            started_at: Local::now(),
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("Match started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }
}

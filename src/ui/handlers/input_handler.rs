//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::score::Side;

use super::super::app::App;
use super::ScoreHandler;

/// Helper struct for mapping key presses to score actions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => {
                ScoreHandler::new(self.app).new_match();
            }

            (KeyCode::Char('z' | 'Z'), KeyModifiers::CONTROL)
            | (KeyCode::Char('u' | 'U'), _)
            | (KeyCode::Backspace, _) => {
                ScoreHandler::new(self.app).undo();
            }

            (KeyCode::Char('a' | 'A'), _) | (KeyCode::Left, _) => {
                ScoreHandler::new(self.app).score(Side::A);
            }

            (KeyCode::Char('b' | 'B'), _) | (KeyCode::Right, _) => {
                ScoreHandler::new(self.app).score(Side::B);
            }

            _ => {}
        }
        false
    }
}

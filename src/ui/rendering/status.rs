use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{feedback::Outcome, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let last = self
            .last_outcome
            .map(|o| o.to_string())
            .unwrap_or_else(|| "-".to_string());

        let status_text = format!(
            "Started {} | Last: {} | Ctrl+N: new match | Ctrl+Q: quit",
            self.started_at.format("%H:%M"),
            last
        );

        let color = match self.last_outcome {
            Some(Outcome::SetWon(_)) => Color::Green,
            Some(Outcome::GameWon(_)) => Color::Cyan,
            Some(Outcome::UndoEmpty) => Color::Red,
            Some(Outcome::UndoToZero | Outcome::UndoPartial) => Color::Yellow,
            _ => Color::White,
        };

        f.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title("Padel")),
            area,
        );
    }
}

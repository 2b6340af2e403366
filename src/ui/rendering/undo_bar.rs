use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_undo_bar(&self, f: &mut Frame, area: Rect) {
        // Undo is only offered when there is something to take back
        let (text, color) = match self.session.last_scorer() {
            None => ("UNDO (nothing to undo)".to_string(), Color::DarkGray),
            Some(side) => (
                format!(
                    "↶ UNDO [u] point for {}  ({} points recorded)",
                    self.team_names[side],
                    self.session.history_len()
                ),
                Color::Gray,
            ),
        };

        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

//! Match log panel: newest entry on top, older entries dimmed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let visible = (area.height as usize).saturating_sub(2);

        let items: Vec<ListItem> = self
            .logs
            .lines()
            .into_iter()
            .rev()
            .take(visible)
            .enumerate()
            .map(|(age, entry)| {
                let style = if age == 0 {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(Span::styled(entry, style)))
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title("Match log")),
            area,
        );
    }
}

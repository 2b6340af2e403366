//! Per-side score panels.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{score::Side, ui::app::App};

fn side_color(side: Side) -> Color {
    match side {
        Side::A => Color::Blue,
        Side::B => Color::Rgb(255, 140, 0),
    }
}

impl App {
    pub(in crate::ui) fn draw_scoreboard(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_side(f, columns[0], Side::A);
        self.draw_side(f, columns[1], Side::B);
    }

    fn draw_side(&self, f: &mut Frame, area: Rect, side: Side) {
        let state = self.session.state();
        let color = side_color(side);
        let key_hint = match side {
            Side::A => "a / ←",
            Side::B => "b / →",
        };

        let lines = vec![
            Line::from(format!("Sets  {}", state.sets[side])),
            Line::from(format!("Games {}", state.games[side])),
            Line::from(""),
            Line::from(Span::styled(
                self.session.point_label(side).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.team_names[side].clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!("Side {} [{}]", side, key_hint)),
            ),
            area,
        );
    }
}

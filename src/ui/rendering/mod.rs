mod logs;
mod scoreboard;
mod status;
mod undo_bar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::app::App;

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // status
                Constraint::Min(8),     // scoreboard
                Constraint::Length(3),  // undo
                Constraint::Length(8),  // logs
            ])
            .split(f.area());

        self.draw_status(f, layout[0]);
        self.draw_scoreboard(f, layout[1]);
        self.draw_undo_bar(f, layout[2]);
        self.draw_logs(f, layout[3]);
    }
}

mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::LogBuffer;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{config::Config, feedback::TracingFeedback};

/// Entry point for running the UI.
pub fn run_ui(config: &Config) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(config.team_names.clone(), logs, Box::new(TracingFeedback));

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

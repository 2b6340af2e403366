pub mod args;
pub mod config;
pub mod feedback;
pub mod history;
pub mod logging;
pub mod score;
pub mod script;
pub mod session;
pub mod ui;

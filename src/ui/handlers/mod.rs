//! Handler modules for keyboard input and score changes.

mod input_handler;
mod score_handler;

pub use input_handler::InputHandler;
pub use score_handler::ScoreHandler;

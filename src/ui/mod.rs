//! Terminal front-end: setup prompts, crossterm key input, and the ratatui
//! board view.

mod board_view;
pub mod prompt;
mod terminal;

pub use prompt::Prompter;
pub use terminal::{decode_key, CrosstermKeys, TerminalUi};

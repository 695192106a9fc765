//! Interactive session state machine: initial population, editing, and the
//! step/continuous animation loop, driven by decoded keys and ticks.

mod controller;
mod io;
mod setup;
mod state;
#[cfg(test)]
mod testing;

pub use controller::SessionController;
pub use io::{BoardView, FixedInterval, KeySource, Pacer, Renderer};
pub use setup::InitialBoard;
pub use state::{Action, AnimationMode, PlayMode, SessionEvent, SessionState};

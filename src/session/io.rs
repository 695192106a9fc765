use std::io;
use std::time::Duration;

use crate::game::{Cursor, GridBuffer, Key};

use super::state::SessionState;

/// Source of decoded key events.
///
/// Step mode and editing block on `read_key`. Continuous mode calls
/// `poll_key` once per tick, and it must never wait.
pub trait KeySource {
    /// Block until a decoded key is available.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Return a pending key if there is one, without waiting.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub grid: &'a GridBuffer,
    /// Present only while editing.
    pub cursor: Option<Cursor>,
    pub state: SessionState,
    pub generation: u64,
}

/// Draws the board after every state-changing transition.
pub trait Renderer {
    fn render(&mut self, view: &BoardView<'_>) -> io::Result<()>;
}

/// Paces continuous animation.
pub trait Pacer {
    /// Wait out one tick interval.
    fn wait_tick(&mut self);
}

/// Pacer that sleeps a fixed interval per tick.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    interval: Duration,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        FixedInterval { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Pacer for FixedInterval {
    fn wait_tick(&mut self) {
        std::thread::sleep(self.interval);
    }
}

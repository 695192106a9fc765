//! Scripted collaborators for driving a session in tests.

use std::collections::VecDeque;
use std::io;

use crate::game::{Cursor, GridBuffer, Key};

use super::io::{BoardView, KeySource, Pacer, Renderer};
use super::state::SessionState;

/// Replays a fixed script. `None` entries are polls that find no pending key;
/// blocking reads skip over them. Running past the end is an error.
pub struct ScriptedKeys {
    script: VecDeque<Option<Key>>,
}

impl ScriptedKeys {
    pub fn new(script: &[Option<Key>]) -> Self {
        ScriptedKeys {
            script: script.iter().copied().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }

    fn exhausted() -> io::Error {
        io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        while let Some(entry) = self.script.pop_front() {
            if let Some(key) = entry {
                return Ok(key);
            }
        }
        Err(Self::exhausted())
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        self.script.pop_front().ok_or_else(Self::exhausted)
    }
}

/// An owned copy of one rendered frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub grid: GridBuffer,
    pub cursor: Option<Cursor>,
    pub state: SessionState,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &BoardView<'_>) -> io::Result<()> {
        self.frames.push(Frame {
            grid: view.grid.clone(),
            cursor: view.cursor,
            state: view.state,
            generation: view.generation,
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CountingPacer {
    pub ticks: usize,
}

impl Pacer for CountingPacer {
    fn wait_tick(&mut self) {
        self.ticks += 1;
    }
}

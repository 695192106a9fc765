use std::path::Path;

use log::{debug, info};

use crate::error::{GridError, PersistenceError, SessionError};
use crate::game::{BoardEditor, Cursor, EditorSignal, Generations, GridBuffer};
use crate::persistence;

use super::io::{BoardView, KeySource, Pacer, Renderer};
use super::setup::InitialBoard;
use super::state::{Action, AnimationMode, PlayMode, SessionEvent, SessionState};

/// Top-level session: owns both generation buffers, decides when to advance
/// and when the editor gets the keys.
pub struct SessionController {
    generations: Generations,
    play_mode: PlayMode,
    animation: AnimationMode,
    state: SessionState,
    editor: Option<BoardEditor>,
}

impl SessionController {
    /// Populate the first generation. The session starts in `Setup`.
    ///
    /// `animation` is the mode entered once animation begins.
    pub fn new(board: InitialBoard, animation: AnimationMode) -> Result<Self, GridError> {
        let play_mode = board.play_mode();
        let grid = board.populate()?;
        Ok(SessionController {
            generations: Generations::new(grid),
            play_mode,
            animation,
            state: SessionState::Setup,
            editor: None,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn play_mode(&self) -> PlayMode {
        self.play_mode
    }

    /// The latest generation.
    pub fn grid(&self) -> &GridBuffer {
        self.generations.current()
    }

    pub fn generation(&self) -> u64 {
        self.generations.generation()
    }

    /// The editing cursor, present only while editing.
    pub fn cursor(&self) -> Option<Cursor> {
        self.editor.as_ref().map(BoardEditor::cursor)
    }

    /// Leave `Setup`: drawn boards go to the editor, everything else animates.
    pub fn begin(&mut self) {
        if self.state != SessionState::Setup {
            return;
        }
        let next = SessionState::after_setup(self.play_mode, self.animation);
        self.enter(next);
    }

    /// Apply one event. Returns whether anything visible changed.
    pub fn handle_event(&mut self, event: SessionEvent) -> bool {
        let (mut next, action) = self.state.transition(event);
        let changed = match action {
            Action::None => false,
            Action::Redraw => true,
            Action::Advance => {
                self.generations.step();
                true
            }
            Action::Edit(key) => {
                let editor = self.editor.get_or_insert_with(BoardEditor::new);
                if editor.handle_key(self.generations.current_mut(), key) == EditorSignal::Finished {
                    next = SessionState::after_editing(self.animation);
                }
                true
            }
        };
        if next != self.state {
            self.enter(next);
        }
        changed
    }

    /// Drive the session until it reaches `Terminating`.
    ///
    /// Editing and step mode block on the next key. Continuous mode advances
    /// on every tick, then polls once for a pending key without waiting.
    pub fn run<K, R, P>(
        &mut self,
        keys: &mut K,
        renderer: &mut R,
        pacer: &mut P,
    ) -> Result<(), SessionError>
    where
        K: KeySource + ?Sized,
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state == SessionState::Setup {
            self.begin();
        }
        self.render(renderer)?;

        while !self.state.is_terminal() {
            if self.state.blocks_on_input() {
                let key = keys.read_key()?;
                self.dispatch(SessionEvent::Key(key), renderer)?;
            } else {
                self.dispatch(SessionEvent::Tick, renderer)?;
                pacer.wait_tick();
                if let Some(key) = keys.poll_key()? {
                    self.dispatch(SessionEvent::Key(key), renderer)?;
                }
            }
        }
        Ok(())
    }

    /// Save the latest generation to `path` and release both buffers.
    pub fn finish(self, path: &Path) -> Result<(), PersistenceError> {
        let grid = self.generations.into_current();
        persistence::save_to_path(&grid, path)
    }

    fn dispatch<R: Renderer + ?Sized>(
        &mut self,
        event: SessionEvent,
        renderer: &mut R,
    ) -> Result<(), SessionError> {
        if self.handle_event(event) {
            self.render(renderer)?;
        }
        Ok(())
    }

    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), SessionError> {
        let view = BoardView {
            grid: self.generations.current(),
            cursor: self.cursor(),
            state: self.state,
            generation: self.generations.generation(),
        };
        renderer.render(&view)?;
        Ok(())
    }

    fn enter(&mut self, next: SessionState) {
        info!("session: {} -> {}", self.state.name(), next.name());
        match next {
            SessionState::Editing => {
                self.editor = Some(BoardEditor::new());
            }
            _ => {
                if self.editor.take().is_some() {
                    debug!("editor discarded");
                }
            }
        }
        self.state = next;
    }
}

use serde::{Deserialize, Serialize};

use crate::game::Key;

/// How generations advance while animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Advance once per tick.
    Continuous,
    /// Advance only on an explicit step key.
    #[default]
    Step,
}

/// How the initial board is populated. Consumed once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayMode {
    Random,
    FromFile,
    UserDrawn,
}

impl PlayMode {
    /// Get mode name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayMode::Random => "Random",
            PlayMode::FromFile => "From file",
            PlayMode::UserDrawn => "Drawn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Setup,
    Editing,
    Animating(AnimationMode),
    Terminating,
}

/// Input to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Key(Key),
    /// Fixed-interval timer signal.
    Tick,
}

/// Work the controller performs as part of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do; the event was ignored.
    None,
    /// Advance one generation.
    Advance,
    /// Forward the key to the board editor.
    Edit(Key),
    /// State changed without touching the board.
    Redraw,
}

impl SessionState {
    /// The state that follows `Setup` once the board has been populated.
    pub fn after_setup(play_mode: PlayMode, animation: AnimationMode) -> SessionState {
        match play_mode {
            PlayMode::UserDrawn => SessionState::Editing,
            PlayMode::Random | PlayMode::FromFile => SessionState::Animating(animation),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == SessionState::Terminating
    }

    /// Whether the driver should block for the next key in this state.
    ///
    /// Continuous animation never blocks; it polls once per tick instead.
    pub fn blocks_on_input(self) -> bool {
        matches!(
            self,
            SessionState::Editing | SessionState::Animating(AnimationMode::Step)
        )
    }

    /// Compute the next state and the action to perform for `event`.
    ///
    /// Editing hands every key to the editor; leaving the editor is reported
    /// by the editor itself (see [`SessionState::after_editing`]).
    pub fn transition(self, event: SessionEvent) -> (SessionState, Action) {
        use AnimationMode::{Continuous, Step};
        use SessionState::{Animating, Editing, Setup, Terminating};

        match (self, event) {
            (Setup, _) | (Terminating, _) => (self, Action::None),

            (Editing, SessionEvent::Key(key)) => (Editing, Action::Edit(key)),
            (Editing, SessionEvent::Tick) => (Editing, Action::None),

            (Animating(_), SessionEvent::Key(Key::Escape)) => (Terminating, Action::Redraw),

            (Animating(Step), SessionEvent::Key(Key::Down)) => {
                (Animating(Continuous), Action::Redraw)
            }
            (Animating(Step), SessionEvent::Key(Key::Right)) => (Animating(Step), Action::Advance),
            (Animating(Step), _) => (self, Action::None),

            (Animating(Continuous), SessionEvent::Tick) => (self, Action::Advance),
            (Animating(Continuous), SessionEvent::Key(Key::Right)) => {
                (Animating(Step), Action::Advance)
            }
            (Animating(Continuous), SessionEvent::Key(_)) => (self, Action::None),
        }
    }

    /// The state entered when the editor reports it is finished.
    pub fn after_editing(animation: AnimationMode) -> SessionState {
        SessionState::Animating(animation)
    }

    /// Get state name for display
    pub fn name(self) -> &'static str {
        match self {
            SessionState::Setup => "Setup",
            SessionState::Editing => "Editing",
            SessionState::Animating(AnimationMode::Step) => "Step-by-step",
            SessionState::Animating(AnimationMode::Continuous) => "Continuous",
            SessionState::Terminating => "Terminating",
        }
    }
}

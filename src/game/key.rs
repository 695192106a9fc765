/// A key event already decoded from the keyboard driver.
///
/// `Right` and `Down` double as animation commands while the board is
/// animating; the session decides which meaning applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
}

impl Key {
    /// Get key name for display
    pub fn name(self) -> &'static str {
        match self {
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Enter => "Enter",
            Key::Escape => "Escape",
        }
    }
}

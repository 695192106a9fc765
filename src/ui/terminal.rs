use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::game::Key;
use crate::session::{BoardView, KeySource, Renderer};

/// Map a terminal event to a decoded key. Key releases and every other key
/// decode to `None`.
pub fn decode_key(event: &Event) -> Option<Key> {
    match event {
        Event::Key(KeyEvent { code, kind, .. }) if *kind != KeyEventKind::Release => match code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            _ => None,
        },
        _ => None,
    }
}

/// Keyboard input through crossterm's event queue.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = decode_key(&event::read()?) {
                debug!("read key {}", key.name());
                return Ok(key);
            }
        }
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        // Drain whatever is queued, stopping at the first decodable key.
        while event::poll(Duration::ZERO)? {
            if let Some(key) = decode_key(&event::read()?) {
                debug!("polled key {}", key.name());
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Raw-mode, alternate-screen terminal that draws board frames.
pub struct TerminalUi {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalUi {
    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(TerminalUi { terminal })
    }

    /// Restore the terminal. Every step runs even if an earlier one fails.
    pub fn restore(mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let cursor = self.terminal.show_cursor();
        raw.and(screen).and(cursor)
    }
}

impl Renderer for TerminalUi {
    fn render(&mut self, view: &BoardView<'_>) -> io::Result<()> {
        self.terminal
            .draw(|f| super::board_view::render(f, view))?;
        Ok(())
    }
}

use log::debug;

use super::grid::GridBuffer;
use super::key::Key;

/// Editing cursor position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

/// What the editor reports after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorSignal {
    /// Still editing; the board or cursor may have changed and should be redrawn.
    Redraw,
    /// Escape was pressed; editing is over.
    Finished,
}

/// Cursor-driven board editor.
///
/// The editor owns only the cursor. The board is borrowed for each key so
/// that it stays owned by the session across the whole edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEditor {
    cursor: Cursor,
}

impl BoardEditor {
    /// Start editing with the cursor at the top-left cell.
    pub fn new() -> Self {
        BoardEditor {
            cursor: Cursor::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Apply one decoded key to the cursor and board.
    ///
    /// Arrow keys move by one cell and stop at the edges. Enter toggles the
    /// cell under the cursor. Escape finishes editing.
    pub fn handle_key(&mut self, grid: &mut GridBuffer, key: Key) -> EditorSignal {
        let Cursor { x, y } = self.cursor;
        match key {
            Key::Up => self.cursor.y = y.saturating_sub(1),
            Key::Down => self.cursor.y = (y + 1).min(grid.height() - 1),
            Key::Left => self.cursor.x = x.saturating_sub(1),
            Key::Right => self.cursor.x = (x + 1).min(grid.width() - 1),
            Key::Enter => {
                let alive = grid.toggle(x, y);
                debug!("toggled ({}, {}) to {}", x, y, if alive { "alive" } else { "dead" });
            }
            Key::Escape => return EditorSignal::Finished,
        }
        EditorSignal::Redraw
    }
}

impl Default for BoardEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const MOVES: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

    #[test]
    fn test_starts_at_origin() {
        assert_eq!(BoardEditor::new().cursor(), Cursor { x: 0, y: 0 });
    }

    #[test]
    fn test_moves_clamp_at_edges() {
        let mut grid = GridBuffer::allocate(3, 4).unwrap();
        let mut editor = BoardEditor::new();

        editor.handle_key(&mut grid, Key::Up);
        editor.handle_key(&mut grid, Key::Left);
        assert_eq!(editor.cursor(), Cursor { x: 0, y: 0 });

        for _ in 0..10 {
            editor.handle_key(&mut grid, Key::Right);
            editor.handle_key(&mut grid, Key::Down);
        }
        assert_eq!(editor.cursor(), Cursor { x: 3, y: 2 });
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_random_walks() {
        let mut rng = StdRng::seed_from_u64(42);
        for (h, w) in [(1, 1), (1, 6), (5, 1), (7, 9)] {
            let mut grid = GridBuffer::allocate(h, w).unwrap();
            let mut editor = BoardEditor::new();
            for _ in 0..500 {
                let key = MOVES[rng.random_range(0..MOVES.len())];
                assert_eq!(editor.handle_key(&mut grid, key), EditorSignal::Redraw);
                let Cursor { x, y } = editor.cursor();
                assert!(x < w && y < h, "cursor ({}, {}) left {}x{} board", x, y, h, w);
            }
        }
    }

    #[test]
    fn test_enter_toggles_only_cursor_cell() {
        let mut grid = GridBuffer::allocate(3, 3).unwrap();
        grid.set(0, 0, true);
        let before = grid.clone();
        let mut editor = BoardEditor::new();
        editor.handle_key(&mut grid, Key::Right);
        editor.handle_key(&mut grid, Key::Down);

        editor.handle_key(&mut grid, Key::Enter);
        assert!(grid.get(1, 1));
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (1, 1) {
                    assert_eq!(grid.get(x, y), before.get(x, y), "cell ({}, {})", x, y);
                }
            }
        }

        editor.handle_key(&mut grid, Key::Enter);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_escape_finishes_without_change() {
        let mut grid = GridBuffer::allocate(2, 2).unwrap();
        let mut editor = BoardEditor::new();
        editor.handle_key(&mut grid, Key::Right);
        assert_eq!(editor.handle_key(&mut grid, Key::Escape), EditorSignal::Finished);
        assert_eq!(editor.cursor(), Cursor { x: 1, y: 0 });
        assert!(grid.is_empty());
    }
}

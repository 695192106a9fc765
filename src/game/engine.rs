use log::debug;

use super::grid::GridBuffer;

/// Count alive cells in the Moore neighborhood of `(x, y)`.
///
/// Positions beyond the board edges are absent, not wrapped: a corner has at
/// most 3 neighbors, an edge cell at most 5, an interior cell at most 8.
pub fn count_live_neighbors(grid: &GridBuffer, x: usize, y: usize) -> u8 {
    let x_lo = x.saturating_sub(1);
    let x_hi = (x + 1).min(grid.width() - 1);
    let y_lo = y.saturating_sub(1);
    let y_hi = (y + 1).min(grid.height() - 1);

    let mut count = 0;
    for ny in y_lo..=y_hi {
        for nx in x_lo..=x_hi {
            if (nx, ny) != (x, y) && grid.get(nx, ny) {
                count += 1;
            }
        }
    }
    count
}

/// B3/S23: survival on 2 or 3 neighbors, birth on exactly 3.
pub fn next_cell_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the generation after `current` into `next`.
///
/// `current` is only read; every cell of `next` is overwritten.
/// Panics if the two boards differ in size.
pub fn advance(current: &GridBuffer, next: &mut GridBuffer) {
    assert!(
        current.same_shape(next),
        "advance between {}x{} and {}x{} boards",
        current.height(),
        current.width(),
        next.height(),
        next.width()
    );

    for y in 0..current.height() {
        for x in 0..current.width() {
            let n = count_live_neighbors(current, x, y);
            next.set(x, y, next_cell_state(current.get(x, y), n));
        }
    }
}

/// Double-buffered generation state: the latest board plus a scratch board
/// of the same size that receives the next generation.
#[derive(Debug, Clone)]
pub struct Generations {
    current: GridBuffer,
    next: GridBuffer,
    generation: u64,
}

impl Generations {
    /// Wrap an initial board; the scratch buffer is allocated once here.
    pub fn new(initial: GridBuffer) -> Self {
        let next = initial.clone();
        Generations {
            current: initial,
            next,
            generation: 0,
        }
    }

    /// The latest generation.
    pub fn current(&self) -> &GridBuffer {
        &self.current
    }

    /// Mutable access to the latest generation, for editing between steps.
    pub fn current_mut(&mut self) -> &mut GridBuffer {
        &mut self.current
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation, then swap roles so the old board becomes scratch.
    pub fn step(&mut self) {
        advance(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.current.live_count()
        );
    }

    /// Release both buffers, keeping only the latest generation.
    pub fn into_current(self) -> GridBuffer {
        self.current
    }
}

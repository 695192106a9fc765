//! Simulation kernel: the board buffer, the B3/S23 step engine with double
//! buffering, decoded keys, and the cursor-driven board editor.

mod editor;
mod engine;
mod grid;
mod key;

pub use editor::{BoardEditor, Cursor, EditorSignal};
pub use engine::{advance, count_live_neighbors, next_cell_state, Generations};
pub use grid::GridBuffer;
pub use key::Key;

//! Board files: a fixed binary layout with a two-integer dimension header.

mod codec;

pub use codec::{load, load_from_path, save, save_to_path, HEADER_INTS, INT_SIZE};

use std::io::Read;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{GridError, PersistenceError};
use crate::game::GridBuffer;
use crate::persistence;

use super::state::PlayMode;

/// Everything needed to populate the first generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialBoard {
    /// Every cell an independent fair coin flip. `seed: None` seeds from the OS.
    Random {
        height: usize,
        width: usize,
        seed: Option<u64>,
    },
    /// A board already read from a save file.
    FromFile(GridBuffer),
    /// An empty board for the user to draw on.
    UserDrawn { height: usize, width: usize },
}

impl InitialBoard {
    /// Read a saved board from an open source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PersistenceError> {
        persistence::load(reader).map(InitialBoard::FromFile)
    }

    pub fn play_mode(&self) -> PlayMode {
        match self {
            InitialBoard::Random { .. } => PlayMode::Random,
            InitialBoard::FromFile(_) => PlayMode::FromFile,
            InitialBoard::UserDrawn { .. } => PlayMode::UserDrawn,
        }
    }

    /// Allocate and fill the first generation.
    pub fn populate(self) -> Result<GridBuffer, GridError> {
        match self {
            InitialBoard::Random {
                height,
                width,
                seed,
            } => {
                let mut grid = GridBuffer::allocate(height, width)?;
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                grid.randomize(&mut rng);
                info!(
                    "randomized {}x{} board: {} live cells",
                    height,
                    width,
                    grid.live_count()
                );
                Ok(grid)
            }
            InitialBoard::FromFile(grid) => Ok(grid),
            InitialBoard::UserDrawn { height, width } => GridBuffer::allocate(height, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_modes() {
        let grid = GridBuffer::allocate(1, 1).unwrap();
        assert_eq!(
            InitialBoard::Random {
                height: 1,
                width: 1,
                seed: None
            }
            .play_mode(),
            PlayMode::Random
        );
        assert_eq!(InitialBoard::FromFile(grid).play_mode(), PlayMode::FromFile);
        assert_eq!(
            InitialBoard::UserDrawn {
                height: 1,
                width: 1
            }
            .play_mode(),
            PlayMode::UserDrawn
        );
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let board = InitialBoard::Random {
            height: 12,
            width: 20,
            seed: Some(1234),
        };
        let a = board.clone().populate().unwrap();
        let b = board.populate().unwrap();
        assert_eq!(a, b);
        assert_eq!((a.height(), a.width()), (12, 20));
    }

    #[test]
    fn test_user_drawn_starts_empty() {
        let grid = InitialBoard::UserDrawn {
            height: 4,
            width: 6,
        }
        .populate()
        .unwrap();
        assert!(grid.is_empty());
        assert_eq!((grid.height(), grid.width()), (4, 6));
    }

    #[test]
    fn test_invalid_dimensions_are_rejected() {
        let err = InitialBoard::UserDrawn {
            height: 0,
            width: 6,
        }
        .populate()
        .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimensions {
                height: 0,
                width: 6
            }
        );
        assert!(InitialBoard::Random {
            height: 3,
            width: 0,
            seed: Some(1)
        }
        .populate()
        .is_err());
    }

    #[test]
    fn test_from_reader_takes_dimensions_from_header() {
        let mut bytes = Vec::new();
        for v in [2i32, 3, 1, 0, 0, 0, 0, 1] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let board = InitialBoard::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(board.play_mode(), PlayMode::FromFile);
        let grid = board.populate().unwrap();
        assert_eq!((grid.height(), grid.width()), (2, 3));
        assert!(grid.get(0, 0) && grid.get(2, 1));
        assert_eq!(grid.live_count(), 2);
    }
}

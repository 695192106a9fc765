use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{info, warn};

use crate::error::PersistenceError;
use crate::game::GridBuffer;

/// Size in bytes of every integer in a board file.
pub const INT_SIZE: usize = 4;

/// Number of header integers (height, then width).
pub const HEADER_INTS: usize = 2;

/// Write `grid` as: height, width, then `height * width` cells in row-major
/// order, each `0` or `1`. Every integer is a 32-bit signed little-endian value.
pub fn save<W: Write>(grid: &GridBuffer, mut writer: W) -> Result<(), PersistenceError> {
    writer.write_all(&encode_dimension(grid.height())?)?;
    writer.write_all(&encode_dimension(grid.width())?)?;
    for row in grid.rows() {
        for &alive in row {
            writer.write_all(&i32::from(alive).to_le_bytes())?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Read a board written by [`save`].
///
/// A stored cell value of exactly `1` is alive; any other value is dead.
/// Bytes after the last declared cell are ignored.
pub fn load<R: Read>(mut reader: R) -> Result<GridBuffer, PersistenceError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let found = bytes.len() / INT_SIZE;

    let mut ints = bytes
        .chunks_exact(INT_SIZE)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));

    let (height, width) = match (ints.next(), ints.next()) {
        (Some(h), Some(w)) => (h, w),
        _ => {
            return Err(PersistenceError::MalformedFile {
                expected: HEADER_INTS,
                found,
            })
        }
    };

    let height = decode_dimension(height);
    let width = decode_dimension(width);

    // Checked before allocating so a corrupt header cannot request a huge board.
    let expected = height
        .checked_mul(width)
        .and_then(|cells| cells.checked_add(HEADER_INTS))
        .unwrap_or(usize::MAX);
    if found < expected {
        return Err(PersistenceError::MalformedFile { expected, found });
    }
    let mut grid = GridBuffer::allocate(height, width)?;

    let mut normalized = 0usize;
    for y in 0..height {
        for x in 0..width {
            // `found >= expected` guarantees the iterator has a value here
            let value = ints.next().unwrap_or(0);
            if value != 0 && value != 1 {
                normalized += 1;
            }
            grid.set(x, y, value == 1);
        }
    }
    if normalized > 0 {
        warn!(
            "{} stored cell values were neither 0 nor 1 and were loaded as dead",
            normalized
        );
    }

    Ok(grid)
}

/// Save `grid` to a file, creating or truncating it.
///
/// A failure part way through leaves whatever was already written.
pub fn save_to_path(grid: &GridBuffer, path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path).map_err(|e| PersistenceError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    save(grid, BufWriter::new(file))?;
    info!(
        "saved {}x{} board to {}",
        grid.height(),
        grid.width(),
        path.display()
    );
    Ok(())
}

/// Load a board from a file.
pub fn load_from_path(path: &Path) -> Result<GridBuffer, PersistenceError> {
    let file = File::open(path).map_err(|e| PersistenceError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let grid = load(BufReader::new(file))?;
    info!(
        "loaded {}x{} board from {}",
        grid.height(),
        grid.width(),
        path.display()
    );
    Ok(grid)
}

fn encode_dimension(value: usize) -> Result<[u8; INT_SIZE], PersistenceError> {
    let value = i32::try_from(value).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("board dimension {} does not fit in a 32-bit header", value),
        )
    })?;
    Ok(value.to_le_bytes())
}

/// Negative header values map to 0 so that allocation reports them as invalid.
fn decode_dimension(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

use rand::Rng;

use crate::error::GridError;

/// A fixed-size board of alive/dead cells, stored row-major in one flat buffer.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row; `(0, 0)` is
/// the top-left cell. Dimensions never change after allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridBuffer {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl GridBuffer {
    /// Allocate an all-dead board.
    pub fn allocate(height: usize, width: usize) -> Result<Self, GridError> {
        if height < 1 || width < 1 {
            return Err(GridError::InvalidDimensions { height, width });
        }
        let len = height
            .checked_mul(width)
            .ok_or(GridError::InvalidDimensions { height, width })?;
        Ok(GridBuffer {
            height,
            width,
            cells: vec![false; len],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `other` has exactly the same dimensions.
    pub fn same_shape(&self, other: &GridBuffer) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Get the cell at column `x`, row `y`.
    ///
    /// Panics if the position is outside the board.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Set the cell at column `x`, row `y`.
    ///
    /// Panics if the position is outside the board.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Flip the cell at `(x, y)` and return its new value.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let idx = self.index(x, y);
        self.cells[idx] = !self.cells[idx];
        self.cells[idx]
    }

    /// Overwrite every cell with the contents of `other`.
    ///
    /// Panics if the two boards differ in size.
    pub fn copy_from(&mut self, other: &GridBuffer) {
        assert!(
            self.same_shape(other),
            "copy_from between {}x{} and {}x{} boards",
            self.height,
            self.width,
            other.height,
            other.width
        );
        self.cells.copy_from_slice(&other.cells);
    }

    /// Fill every cell with an independent, unbiased random value.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random_bool(0.5);
        }
    }

    /// A single row as a slice, left to right.
    pub fn row(&self, y: usize) -> &[bool] {
        assert!(y < self.height, "row {} out of bounds (height {})", y, self.height);
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Number of alive cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of bounds for {}x{} board",
            x,
            y,
            self.height,
            self.width
        );
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_allocate_is_all_dead() {
        let grid = GridBuffer::allocate(3, 4).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        for y in 0..3 {
            for x in 0..4 {
                assert!(!grid.get(x, y));
            }
        }
        assert!(grid.is_empty());
    }

    #[test]
    fn test_allocate_rejects_zero_dimensions() {
        assert_eq!(
            GridBuffer::allocate(0, 5),
            Err(GridError::InvalidDimensions {
                height: 0,
                width: 5
            })
        );
        assert!(GridBuffer::allocate(5, 0).is_err());
        assert!(GridBuffer::allocate(1, 1).is_ok());
    }

    #[test]
    fn test_set_is_row_major() {
        let mut grid = GridBuffer::allocate(2, 3).unwrap();
        grid.set(2, 0, true);
        grid.set(0, 1, true);
        assert_eq!(grid.row(0), &[false, false, true]);
        assert_eq!(grid.row(1), &[true, false, false]);
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut grid = GridBuffer::allocate(2, 2).unwrap();
        assert!(grid.toggle(1, 1));
        assert!(!grid.toggle(1, 1));
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = GridBuffer::allocate(2, 2).unwrap();
        grid.get(2, 0);
    }

    #[test]
    fn test_copy_from() {
        let mut source = GridBuffer::allocate(2, 2).unwrap();
        source.set(0, 1, true);
        let mut target = GridBuffer::allocate(2, 2).unwrap();
        target.set(1, 0, true);

        target.copy_from(&source);
        assert_eq!(target, source);
    }

    #[test]
    #[should_panic(expected = "copy_from")]
    fn test_copy_from_shape_mismatch_panics() {
        let source = GridBuffer::allocate(2, 3).unwrap();
        let mut target = GridBuffer::allocate(3, 2).unwrap();
        target.copy_from(&source);
    }

    #[test]
    fn test_randomize_is_roughly_unbiased() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = GridBuffer::allocate(40, 50).unwrap();
        grid.randomize(&mut rng);
        let alive = grid.live_count();
        // 2000 fair coin flips; anything outside this band is a broken source
        assert!(alive > 800 && alive < 1200, "alive = {}", alive);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let mut grid = GridBuffer::allocate(3, 2).unwrap();
        grid.set(1, 2, true);
        let rows: Vec<&[bool]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[false, true]);
    }
}

//! Row-major 2D grid storage.
//!
//! [`Grid`] is deliberately plain: a row count, a column count, and a flat
//! `Vec<T>` in row-major order with the origin at the top-left cell. Every
//! pipeline stage (grayscale image, collision grid, objective grid) uses it.

use crate::error::GridError;

/// Single-channel 8-bit intensity image, 0 = black, 255 = white.
pub type GrayGrid = Grid<u8>;

/// Binary occupancy grid: 0 = free cell, 1 = obstacle cell.
pub type CollisionGrid = Grid<u8>;

/// Objective potential grid with every value in `[0, 1]`.
pub type ObjectiveGrid = Grid<f64>;

/// A dense 2D array stored in row-major order.
///
/// # Examples
///
/// ```
/// use gridcast_core::Grid;
///
/// let g = Grid::from_rows(vec![vec![1u8, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!((g.rows(), g.cols()), (2, 3));
/// assert_eq!(g.get(1, 2), Some(&6));
/// assert_eq!(g.row(0), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer. Fails unless `data.len() == rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::SizeOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from nested rows. All rows must share one length.
    ///
    /// An empty outer vector yields a `0x0` grid.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(row_count.saturating_mul(cols));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            data,
        })
    }

    /// Number of rows (image height).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (image width).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major view of all cells.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable flat row-major view of all cells.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Slice of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds ({})", self.rows);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        // chunks_exact(0) panics, so a zero-width grid yields `rows` empty slices.
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    /// Apply `f` to every cell, preserving dimensions.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A `rows x cols` grid with every cell set to `value`.
    pub fn new_fill(rows: usize, cols: usize, value: T) -> Result<Self, GridError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::SizeOverflow { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }
}

//! Error types for grid construction and coordinate mapping.

use std::error::Error;
use std::fmt;

/// Errors arising from [`Grid`](crate::Grid) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The backing buffer length does not equal `rows * cols`.
    SizeMismatch {
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },
    /// `rows * cols` overflows `usize`.
    SizeOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// Row-wise construction received rows of differing lengths.
    RaggedRows {
        /// Index of the first row whose length differs from row 0.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "grid size mismatch: expected {expected} cells, got {actual}")
            }
            Self::SizeOverflow { rows, cols } => {
                write!(f, "grid dimensions {rows}x{cols} overflow usize")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} to match row 0"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors arising from coordinate extent validation.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordError {
    /// An image extent has a zero dimension.
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },
    /// A world extent dimension is NaN, infinite, zero, or negative.
    InvalidWorldExtent {
        /// Which axis was rejected (`"width"` or `"height"`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImage { width, height } => {
                write!(f, "image extent {width}x{height} has a zero dimension")
            }
            Self::InvalidWorldExtent { axis, value } => {
                write!(f, "world {axis} must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for CoordError {}

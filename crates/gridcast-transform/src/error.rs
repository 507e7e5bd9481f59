//! Error types for grid transforms.

use std::error::Error;
use std::fmt;

use gridcast_core::GridError;

/// Errors from [`to_collision_grid`](crate::to_collision_grid) and
/// [`to_objective_grid`](crate::to_objective_grid).
#[derive(Clone, Debug, PartialEq)]
pub enum TransformError {
    /// The resize scalar is NaN, infinite, zero, or negative.
    InvalidScalar {
        /// The rejected scalar.
        value: f64,
    },
    /// The source image has a zero dimension.
    EmptyImage {
        /// Source width in pixels.
        width: usize,
        /// Source height in pixels.
        height: usize,
    },
    /// A resized dimension does not fit in `usize`.
    DimensionOverflow {
        /// The unrepresentable target size.
        value: f64,
    },
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScalar { value } => {
                write!(f, "resize scalar must be finite and positive, got {value}")
            }
            Self::EmptyImage { width, height } => {
                write!(f, "source image {width}x{height} has no pixels")
            }
            Self::DimensionOverflow { value } => {
                write!(f, "resized dimension {value} does not fit in usize")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for TransformError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

//! Collision grid extraction.
//!
//! Pixels brighter than [`COLLISION_THRESHOLD`] are free space, everything
//! else is an obstacle. The binarised image (free = 255, obstacle = 0) is
//! area-resized, which blends cells along obstacle edges. Blended values
//! are rounded half to even back onto the 8-bit intensity scale, as an
//! 8-bit area resize would store them, and thresholded again so the
//! output holds only `0` (free) and `1` (obstacle).

use gridcast_core::{CollisionGrid, Grid};

use crate::error::TransformError;
use crate::gray::Grayscale;
use crate::resize::{resize_area, target_dims};

/// Intensities strictly above this are free; at or below are obstacles.
pub const COLLISION_THRESHOLD: u8 = 120;

const FREE_INTENSITY: f64 = 255.0;
const OBSTACLE_INTENSITY: f64 = 0.0;

/// Convert `image` into a binary collision grid resized by `scalar`.
///
/// # Errors
///
/// [`TransformError::InvalidScalar`] for a non-positive or non-finite
/// scalar, [`TransformError::EmptyImage`] for a zero-sized image.
///
/// # Examples
///
/// ```
/// use gridcast_core::GrayGrid;
/// use gridcast_transform::to_collision_grid;
///
/// let img = GrayGrid::from_vec(2, 2, vec![255, 0, 121, 120]).unwrap();
/// let grid = to_collision_grid(&img, 1.0).unwrap();
/// assert_eq!(grid.data(), &[0, 1, 0, 1]);
/// ```
pub fn to_collision_grid<I>(image: &I, scalar: f64) -> Result<CollisionGrid, TransformError>
where
    I: Grayscale + ?Sized,
{
    let gray = image.to_gray();
    let (rows, cols) = target_dims(gray.rows(), gray.cols(), scalar)?;

    let binary: Grid<f64> = gray.map(|&v| {
        if v > COLLISION_THRESHOLD {
            FREE_INTENSITY
        } else {
            OBSTACLE_INTENSITY
        }
    });
    let resized = resize_area(&binary, rows, cols);

    Ok(resized.map(|&v| u8::from(v.round_ties_even() <= f64::from(COLLISION_THRESHOLD))))
}

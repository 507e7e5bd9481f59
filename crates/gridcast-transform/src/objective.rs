//! Objective grid extraction.
//!
//! Intensities are min-max normalised to `[0, 1]`, area-resized, and
//! inverted so the darkest source pixels become the most attractive
//! (value `1.0`) cells.
//!
//! A flat image has no range to normalise over. It normalises to all
//! zeros, so its objective grid is all ones.

use gridcast_core::{GrayGrid, Grid, ObjectiveGrid};

use crate::error::TransformError;
use crate::gray::Grayscale;
use crate::resize::{resize_area, target_dims};

/// Min-max normalise 8-bit intensities into `[0, 1]`.
///
/// The minimum maps to `0.0` and the maximum to `1.0`. A zero-range
/// (flat) grid maps every cell to `0.0`.
pub fn normalize_min_max(gray: &GrayGrid) -> Grid<f64> {
    let (min, max) = gray
        .data()
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if max <= min {
        return gray.map(|_| 0.0);
    }
    let lo = f64::from(min);
    let range = f64::from(max) - lo;
    gray.map(|&v| (f64::from(v) - lo) / range)
}

/// Convert `image` into an objective grid resized by `scalar`.
///
/// Every output value lies in `[0, 1]`.
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
/// use gridcast_transform::to_objective_grid;
///
/// let img = GrayGrid::from_vec(2, 2, vec![0, 255, 255, 0]).unwrap();
/// let grid = to_objective_grid(&img, 1.0).unwrap();
/// assert_eq!(grid.data(), &[1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn to_objective_grid<I>(image: &I, scalar: f64) -> Result<ObjectiveGrid, TransformError>
where
    I: Grayscale + ?Sized,
{
    let gray = image.to_gray();
    let (rows, cols) = target_dims(gray.rows(), gray.cols(), scalar)?;

    let normalized = normalize_min_max(&gray);
    let resized = resize_area(&normalized, rows, cols);

    // Clamp absorbs float drift from the weighted sums.
    Ok(resized.map(|&v| (1.0 - v).clamp(0.0, 1.0)))
}

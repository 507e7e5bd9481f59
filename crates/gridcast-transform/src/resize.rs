//! Area-averaging resize.
//!
//! Each output cell covers a `src / dst` wide window of source cells on
//! each axis. Its value is the mean of the source cells under that window,
//! weighted by how much of each cell the window overlaps. For integer
//! shrink factors this is an exact box mean; at scale 1.0 it is the
//! identity. When enlarging, a window spans at most two source cells.
//!
//! The resize is separable: a horizontal pass followed by a vertical pass.

use gridcast_core::Grid;

use crate::error::TransformError;

/// Overlaps below this are float noise from window edges landing on
/// integer boundaries.
const MIN_OVERLAP: f64 = 1e-9;

/// Target `(rows, cols)` for resizing `rows x cols` by `scalar`.
///
/// Each axis is `floor(dim * scalar)`, raised to 1 so a positive scalar
/// never produces an empty grid.
pub fn target_dims(rows: usize, cols: usize, scalar: f64) -> Result<(usize, usize), TransformError> {
    if !scalar.is_finite() || scalar <= 0.0 {
        return Err(TransformError::InvalidScalar { value: scalar });
    }
    if rows == 0 || cols == 0 {
        return Err(TransformError::EmptyImage {
            width: cols,
            height: rows,
        });
    }
    Ok((scaled_dim(rows, scalar)?, scaled_dim(cols, scalar)?))
}

fn scaled_dim(dim: usize, scalar: f64) -> Result<usize, TransformError> {
    let value = (dim as f64 * scalar).floor();
    if value >= usize::MAX as f64 {
        return Err(TransformError::DimensionOverflow { value });
    }
    Ok((value as usize).max(1))
}

/// One source cell's contribution to an output cell.
#[derive(Clone, Copy, Debug)]
struct Tap {
    index: usize,
    weight: f64,
}

/// Per-output-index source taps along one axis.
fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Vec<Tap>> {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = (d + 1) as f64 * scale;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len);
            let mut taps: Vec<Tap> = (first..last)
                .filter_map(|i| {
                    let overlap = end.min((i + 1) as f64) - start.max(i as f64);
                    (overlap > MIN_OVERLAP).then_some(Tap {
                        index: i,
                        weight: overlap,
                    })
                })
                .collect();
            let total: f64 = taps.iter().map(|t| t.weight).sum();
            for t in &mut taps {
                t.weight /= total;
            }
            taps
        })
        .collect()
}

/// Resize `src` to `rows x cols` by area averaging.
///
/// # Panics
///
/// Panics if `src` is empty or a target dimension is zero; use
/// [`target_dims`] to obtain valid dimensions.
pub fn resize_area(src: &Grid<f64>, rows: usize, cols: usize) -> Grid<f64> {
    assert!(!src.is_empty(), "cannot resize an empty grid");
    assert!(rows > 0 && cols > 0, "target dimensions must be non-zero");

    if src.rows() == rows && src.cols() == cols {
        return src.clone();
    }

    let col_taps = axis_taps(src.cols(), cols);
    let row_taps = axis_taps(src.rows(), rows);

    // Horizontal pass: src.rows() x cols.
    let mut horizontal = Vec::with_capacity(src.rows() * cols);
    for row in src.iter_rows() {
        for taps in &col_taps {
            horizontal.push(taps.iter().map(|t| row[t.index] * t.weight).sum::<f64>());
        }
    }

    // Vertical pass: rows x cols.
    let mut out = Vec::with_capacity(rows * cols);
    for taps in &row_taps {
        for c in 0..cols {
            out.push(
                taps.iter()
                    .map(|t| horizontal[t.index * cols + c] * t.weight)
                    .sum::<f64>(),
            );
        }
    }

    match Grid::from_vec(rows, cols, out) {
        Ok(grid) => grid,
        Err(_) => unreachable!("resize output holds rows * cols cells"),
    }
}

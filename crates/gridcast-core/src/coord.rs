//! Pixel ↔ world coordinate and scalar mapping.
//!
//! Pixel space has its origin at the top-left cell, `x` counting columns to
//! the right and `y` counting rows down. World space shares the origin and
//! axis directions but is continuous and scaled to a caller-chosen
//! [`WorldExtent`]. Each axis maps linearly and independently.
//!
//! Grid consumers historically exchange these as bare tuples in opposite
//! orders: world points as `(y, x)` and pixel points as `(x, y)`.
//! [`WorldCoord`] and [`PixelCoord`] carry named fields instead; their
//! `into_tuple` methods reproduce the legacy ordering for callers that
//! need it.
//!
//! # Examples
//!
//! ```
//! use gridcast_core::{pixel_to_world, world_to_pixel, ImageExtent, PixelCoord, WorldExtent};
//!
//! let image = ImageExtent::new(200, 100).unwrap();
//! let world = WorldExtent::with_width(2.0).unwrap();
//!
//! let w = pixel_to_world(PixelCoord::new(100, 50), image, world, false);
//! assert_eq!((w.y, w.x), (0.5, 1.0));
//!
//! let p = world_to_pixel(w, image, world);
//! assert_eq!((p.x, p.y), (100, 50));
//! ```

use crate::error::CoordError;

/// Pixel dimensions of a source image or grid. Both axes are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageExtent {
    width: usize,
    height: usize,
}

impl ImageExtent {
    /// Create an extent of `width` columns by `height` rows.
    pub fn new(width: usize, height: usize) -> Result<Self, CoordError> {
        if width == 0 || height == 0 {
            return Err(CoordError::EmptyImage { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels (column count).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels (row count).
    pub fn height(&self) -> usize {
        self.height
    }
}

/// World-space dimensions. Both axes are finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldExtent {
    width: f64,
    height: f64,
}

impl WorldExtent {
    /// Default world height when the caller only fixes the width.
    pub const DEFAULT_HEIGHT: f64 = 1.0;

    /// Create an extent of `width` by `height` world units.
    pub fn new(width: f64, height: f64) -> Result<Self, CoordError> {
        check_world_axis("width", width)?;
        check_world_axis("height", height)?;
        Ok(Self { width, height })
    }

    /// Create an extent with the given width and a height of `1.0`.
    pub fn with_width(width: f64) -> Result<Self, CoordError> {
        Self::new(width, Self::DEFAULT_HEIGHT)
    }

    /// An aspect-preserving extent for an image: height `1.0`,
    /// width `image.width / image.height`.
    pub fn from_aspect(image: ImageExtent) -> Self {
        Self {
            width: image.width as f64 / image.height as f64,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    /// World width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// World height.
    pub fn height(&self) -> f64 {
        self.height
    }
}

fn check_world_axis(axis: &'static str, value: f64) -> Result<(), CoordError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoordError::InvalidWorldExtent { axis, value });
    }
    Ok(())
}

/// An integer pixel position: `x` is the column, `y` the row.
///
/// Inputs to [`pixel_to_world`] may lie outside the image; outputs of
/// [`world_to_pixel`] are always valid indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    /// Column index.
    pub x: i64,
    /// Row index.
    pub y: i64,
}

impl PixelCoord {
    /// Construct from column `x` and row `y`.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Legacy tuple order: `(x, y)`.
    pub fn into_tuple(self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// `(row, col)` indices if the coordinate lies inside `image`.
    pub fn to_indices(self, image: ImageExtent) -> Option<(usize, usize)> {
        let row = usize::try_from(self.y).ok()?;
        let col = usize::try_from(self.x).ok()?;
        (row < image.height && col < image.width).then_some((row, col))
    }
}

/// A continuous world position: `y` runs down, `x` runs right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldCoord {
    /// Vertical position, nominally in `[0, world height]`.
    pub y: f64,
    /// Horizontal position, nominally in `[0, world width]`.
    pub x: f64,
}

impl WorldCoord {
    /// Construct from vertical `y` and horizontal `x`.
    pub fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }

    /// Legacy tuple order: `(y, x)`.
    pub fn into_tuple(self) -> (f64, f64) {
        (self.y, self.x)
    }
}

/// Map a pixel position into world space.
///
/// `world.y = pixel.y / image.height * world.height`, likewise for `x`
/// against width. With `clamp`, each axis is bounded to `[0, extent]`.
pub fn pixel_to_world(
    pixel: PixelCoord,
    image: ImageExtent,
    world: WorldExtent,
    clamp: bool,
) -> WorldCoord {
    let mut y = (pixel.y as f64 / image.height as f64) * world.height;
    let mut x = (pixel.x as f64 / image.width as f64) * world.width;
    if clamp {
        y = y.clamp(0.0, world.height);
        x = x.clamp(0.0, world.width);
    }
    WorldCoord { y, x }
}

/// Convert a pixel magnitude (e.g. a radius) to world units.
///
/// The height axis is the scale reference regardless of what the scalar
/// measures.
pub fn pixel_scalar_to_world_scalar(px_scalar: f64, image_height: usize, world_height: f64) -> f64 {
    (px_scalar / image_height as f64) * world_height
}

/// Map a world position to the nearest valid pixel.
///
/// Each axis is scaled, rounded half away from zero, then clamped to
/// `[0, dimension - 1]`, so the result always indexes into `image`.
pub fn world_to_pixel(world: WorldCoord, image: ImageExtent, extent: WorldExtent) -> PixelCoord {
    let y = nearest_index(image.height as f64 * world.y / extent.height, image.height);
    let x = nearest_index(image.width as f64 * world.x / extent.width, image.width);
    PixelCoord { x, y }
}

/// Map a world position to continuous pixel space without rounding or
/// clamping. Returns `(x, y)` in fractional pixels.
pub fn world_to_pixel_unrounded(
    world: WorldCoord,
    image: ImageExtent,
    extent: WorldExtent,
) -> (f64, f64) {
    (
        image.width as f64 * world.x / extent.width,
        image.height as f64 * world.y / extent.height,
    )
}

fn nearest_index(scaled: f64, len: usize) -> i64 {
    let max = (len - 1) as f64;
    // `as` saturates and maps NaN to 0, which is a valid index.
    scaled.round().clamp(0.0, max) as i64
}

/// Convert a world magnitude to whole pixels: `round(image_height * scalar)`.
///
/// Assumes a world height of `1.0`; it inverts
/// [`pixel_scalar_to_world_scalar`] only for that height.
pub fn world_scalar_to_pixel_scalar(world_scalar: f64, image_height: usize) -> i64 {
    (image_height as f64 * world_scalar).round() as i64
}

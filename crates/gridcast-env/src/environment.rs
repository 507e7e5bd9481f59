//! A converted grid placed in world space.

use std::path::Path;

use gridcast_batch::{
    AssetOutcome, BatchConfig, BatchConverter, BatchError, Category, DirectoryListing, ImageLoader,
};
use gridcast_core::{
    pixel_to_world, world_to_pixel, world_to_pixel_unrounded, Grid, ImageExtent, PixelCoord,
    WorldCoord, WorldExtent,
};
use gridcast_io::load_grid;
use rand::Rng;
use tracing::{debug, info};

use crate::error::EnvError;

/// How [`GridEnvironment::query`] reads between cell positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Value of the nearest cell.
    #[default]
    Nearest,
    /// Bilinear blend of the four surrounding cells.
    Bilinear,
}

/// A grid with an aspect-preserving world extent.
///
/// World height is `1.0` and world width is `cols / rows`, so a world unit
/// spans the same number of cells on both axes. Cell `(row, col)` sits at
/// world `(row / rows, col / rows)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridEnvironment {
    name: String,
    grid: Grid<f64>,
    image: ImageExtent,
    world: WorldExtent,
}

impl GridEnvironment {
    /// Wrap an in-memory grid. Fails if the grid has no cells.
    pub fn from_grid(name: impl Into<String>, grid: Grid<f64>) -> Result<Self, EnvError> {
        let image = ImageExtent::new(grid.cols(), grid.rows())?;
        Ok(Self {
            name: name.into(),
            grid,
            image,
            world: WorldExtent::from_aspect(image),
        })
    }

    /// Read a grid file.
    pub fn load(path: &Path, name: impl Into<String>) -> Result<Self, EnvError> {
        let grid = load_grid(path)?;
        debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "loaded grid");
        Self::from_grid(name, grid)
    }

    /// Open the asset `name` of `category`, converting it first if its
    /// grid file does not exist yet.
    pub fn open<L, I>(
        config: &BatchConfig,
        category: Category,
        name: &str,
        listing: L,
        loader: I,
    ) -> Result<Self, EnvError>
    where
        L: DirectoryListing,
        I: ImageLoader,
    {
        let converter =
            BatchConverter::new(config.clone(), listing, loader).map_err(BatchError::from)?;
        match converter.convert_asset(category, name)? {
            AssetOutcome::Skipped => {}
            AssetOutcome::Converted { source, .. } => {
                info!(%category, asset = name, source = %source, "converted on demand");
            }
            AssetOutcome::NoSourceImage => {
                return Err(EnvError::NoSourceImage {
                    directory: config.category_root(category).join(name),
                });
            }
        }
        Self::load(&converter.marker_path(category, name), name)
    }

    /// Asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid<f64> {
        &self.grid
    }

    /// Grid dimensions as a pixel extent.
    pub fn image_extent(&self) -> ImageExtent {
        self.image
    }

    /// World dimensions.
    pub fn world_extent(&self) -> WorldExtent {
        self.world
    }

    /// See [`gridcast_core::pixel_to_world`].
    pub fn pixel_to_world(&self, pixel: PixelCoord, clamp: bool) -> WorldCoord {
        pixel_to_world(pixel, self.image, self.world, clamp)
    }

    /// See [`gridcast_core::world_to_pixel`].
    pub fn world_to_pixel(&self, world: WorldCoord) -> PixelCoord {
        world_to_pixel(world, self.image, self.world)
    }

    /// See [`gridcast_core::world_to_pixel_unrounded`]. Returns `(x, y)`.
    pub fn world_to_pixel_unrounded(&self, world: WorldCoord) -> (f64, f64) {
        world_to_pixel_unrounded(world, self.image, self.world)
    }

    /// Grid value at a world position. Positions outside the world extent
    /// read the nearest edge cell.
    pub fn query(&self, world: WorldCoord, sampling: Sampling) -> f64 {
        match sampling {
            Sampling::Nearest => self.nearest(world),
            Sampling::Bilinear => self.bilinear(world),
        }
    }

    /// A world position drawn uniformly from `[0, height) × [0, width)`.
    pub fn sample_point<R: Rng>(&self, rng: &mut R) -> WorldCoord {
        WorldCoord::new(
            rng.random_range(0.0..self.world.height()),
            rng.random_range(0.0..self.world.width()),
        )
    }

    fn cell(&self, row: usize, col: usize) -> f64 {
        self.grid.row(row)[col]
    }

    fn nearest(&self, world: WorldCoord) -> f64 {
        let p = self.world_to_pixel(world);
        // world_to_pixel clamps into range, so the indices are valid.
        self.cell(p.y as usize, p.x as usize)
    }

    fn bilinear(&self, world: WorldCoord) -> f64 {
        let (px, py) = self.world_to_pixel_unrounded(world);
        let (r0, r1, ty) = span(py, self.image.height());
        let (c0, c1, tx) = span(px, self.image.width());

        let top = lerp(self.cell(r0, c0), self.cell(r0, c1), tx);
        let bottom = lerp(self.cell(r1, c0), self.cell(r1, c1), tx);
        lerp(top, bottom, ty)
    }
}

/// Neighbouring indices around a fractional position and the blend weight
/// toward the upper one. The position is clamped to `[0, len - 1]`.
fn span(pos: f64, len: usize) -> (usize, usize, f64) {
    let max = (len - 1) as f64;
    let pos = if pos.is_nan() { 0.0 } else { pos.clamp(0.0, max) };
    let lo = pos.floor();
    let hi = (lo + 1.0).min(max);
    (lo as usize, hi as usize, pos - lo)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

//! Core types for the gridcast conversion pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! row-major [`Grid`] container shared by every stage, the grid aliases
//! that name what a grid holds, and the pixel/world coordinate mapper
//! used by grid consumers.
//!
//! # Coordinate spaces
//!
//! - **Pixel space**: origin top-left, integer `(x, y)` with `x` the column
//!   and `y` the row.
//! - **World space**: floating-point `(y, x)` within caller-chosen extents.
//!   World height defaults to `1.0`.
//!
//! See [`coord`] for the conversion functions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod grid;

pub use coord::{
    pixel_scalar_to_world_scalar, pixel_to_world, world_scalar_to_pixel_scalar, world_to_pixel,
    world_to_pixel_unrounded, ImageExtent, PixelCoord, WorldCoord, WorldExtent,
};
pub use error::{CoordError, GridError};
pub use grid::{CollisionGrid, GrayGrid, Grid, ObjectiveGrid};

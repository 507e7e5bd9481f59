//! Gridcast: convert source images into plain-text collision and
//! objective grids, and query those grids in world space.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridcast sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridcast::prelude::*;
//! use image::{DynamicImage, GrayImage, Luma};
//!
//! // A 4x4 image: dark left half, light right half.
//! let img = DynamicImage::ImageLuma8(GrayImage::from_fn(4, 4, |x, _| {
//!     Luma([if x < 2 { 0 } else { 255 }])
//! }));
//!
//! let collision = to_collision_grid(&img, 0.5).unwrap();
//! assert_eq!(format_collision_grid(&collision), "1,0,\n1,0,\n");
//!
//! let objective = to_objective_grid(&img, 0.5).unwrap();
//! assert_eq!(format_objective_grid(&objective), "1.0,0.0\n1.0,0.0\n");
//!
//! let env = GridEnvironment::from_grid("demo", objective).unwrap();
//! assert_eq!(env.query(WorldCoord::new(0.0, 0.0), Sampling::Nearest), 1.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `gridcast-core` | `Grid`, extents, pixel/world mapping |
//! | [`transform`] | `gridcast-transform` | Collision and objective transforms |
//! | [`io`] | `gridcast-io` | Grid text writer and reader |
//! | [`batch`] | `gridcast-batch` | Directory-tree batch converter |
//! | [`env`] | `gridcast-env` | World-space grid environment |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid container and coordinate mapping (`gridcast-core`).
pub use gridcast_core as core;

/// Image to grid transforms (`gridcast-transform`).
///
/// [`transform::to_collision_grid`] and [`transform::to_objective_grid`]
/// accept anything implementing [`transform::Grayscale`].
pub use gridcast_transform as transform;

/// Grid text serialization (`gridcast-io`).
pub use gridcast_io as io;

/// Batch conversion over an asset directory tree (`gridcast-batch`).
///
/// Configure with [`batch::BatchConfig`] and run a
/// [`batch::BatchConverter`].
pub use gridcast_batch as batch;

/// World-space queries over converted grids (`gridcast-env`).
pub use gridcast_env as env;

/// Common imports for typical gridcast usage.
///
/// ```rust
/// use gridcast::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use gridcast_core::{
        pixel_to_world, world_to_pixel, CollisionGrid, Grid, ImageExtent, ObjectiveGrid,
        PixelCoord, WorldCoord, WorldExtent,
    };

    // Transforms
    pub use gridcast_transform::{to_collision_grid, to_objective_grid, Grayscale, TransformError};

    // Text format
    pub use gridcast_io::{
        format_collision_grid, format_objective_grid, load_grid, save_collision_grid,
        save_objective_grid, GridIoError,
    };

    // Batch
    pub use gridcast_batch::{
        BatchConfig, BatchConverter, BatchError, BatchReport, Category, CategoryOutcome, FsListing,
        ImageCrateLoader,
    };

    // Environment
    pub use gridcast_env::{EnvError, GridEnvironment, Sampling};
}

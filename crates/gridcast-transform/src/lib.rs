//! Image to grid transforms for gridcast.
//!
//! Two pipelines turn a grayscale-convertible source image into a grid:
//!
//! - [`to_collision_grid`]: inverted binary threshold (dark = obstacle),
//!   area-averaging resize, then re-threshold so every cell is 0 or 1.
//! - [`to_objective_grid`]: min-max normalisation to `[0, 1]`,
//!   area-averaging resize, then inversion so dark pixels score high.
//!
//! Both accept anything implementing [`Grayscale`]: decoded
//! [`image::DynamicImage`]s, `image` buffers, or an existing
//! [`GrayGrid`](gridcast_core::GrayGrid).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collision;
pub mod error;
pub mod gray;
pub mod objective;
pub mod resize;

pub use collision::{to_collision_grid, COLLISION_THRESHOLD};
pub use error::TransformError;
pub use gray::{luma_bt601, Grayscale};
pub use objective::{normalize_min_max, to_objective_grid};
pub use resize::{resize_area, target_dims};

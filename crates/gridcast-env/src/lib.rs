//! World-space queries over converted gridcast grids.
//!
//! A [`GridEnvironment`] wraps a collision or objective grid read from its
//! text file and places it in a world whose height is `1.0` and whose
//! width follows the grid's aspect ratio. Callers query grid values at
//! world positions ([`Sampling::Nearest`] or [`Sampling::Bilinear`]),
//! map between pixel and world coordinates, and draw uniform world points.
//!
//! [`GridEnvironment::open`] converts an asset on demand when its grid
//! file has not been produced yet.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod environment;
pub mod error;

pub use environment::{GridEnvironment, Sampling};
pub use error::EnvError;

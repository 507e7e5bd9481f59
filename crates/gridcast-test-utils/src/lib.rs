//! Test utilities and fixtures for gridcast development.
//!
//! Provides synthetic source images (uniform, checkerboard, gradient,
//! seeded noise) and an on-disk asset tree builder for exercising the
//! batch converter against a real filesystem.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    checkerboard, gradient, gray_from_rows, gray_grid, noise_gray, noise_rgb, uniform_gray, AssetTree,
};

//! Benchmark profiles for the gridcast conversion pipeline.
//!
//! - [`reference_image`]: 640x480 seeded RGB noise, a typical asset size
//! - [`stress_image`]: 2048x2048 seeded RGB noise
//! - [`objective_profile`]: a resized objective-sized grid for text benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridcast_core::{CollisionGrid, ObjectiveGrid};
use gridcast_test_utils::noise_rgb;
use image::DynamicImage;

/// Reference source image: 640x480 (307K pixels).
pub fn reference_image(seed: u64) -> DynamicImage {
    noise_rgb(640, 480, seed)
}

/// Stress source image: 2048x2048 (~4.2M pixels).
pub fn stress_image(seed: u64) -> DynamicImage {
    noise_rgb(2048, 2048, seed)
}

/// A `rows x cols` objective grid with a diagonal ramp in `[0, 1]`.
pub fn objective_profile(rows: usize, cols: usize) -> ObjectiveGrid {
    let span = (rows + cols).saturating_sub(2).max(1) as f64;
    let data = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r + c) as f64 / span))
        .collect();
    ObjectiveGrid::from_vec(rows, cols, data).unwrap()
}

/// A `rows x cols` collision grid with alternating cells.
pub fn collision_profile(rows: usize, cols: usize) -> CollisionGrid {
    let data = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| ((r + c) % 2) as u8))
        .collect();
    CollisionGrid::from_vec(rows, cols, data).unwrap()
}

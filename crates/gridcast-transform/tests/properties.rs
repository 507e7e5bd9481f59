//! Property tests for the collision and objective pipelines over decoded
//! images of arbitrary size, content, and colour type.

use gridcast_test_utils::{checkerboard, gradient, gray_grid, noise_gray, noise_rgb, uniform_gray};
use gridcast_transform::{to_collision_grid, to_objective_grid, Grayscale};
use proptest::prelude::*;

fn expected_dim(dim: u32, scalar: f64) -> usize {
    ((f64::from(dim) * scalar).floor() as usize).max(1)
}

#[test]
fn white_image_is_all_free() {
    let g = to_collision_grid(&uniform_gray(2, 2, 255), 1.0).unwrap();
    assert_eq!((g.rows(), g.cols()), (2, 2));
    assert_eq!(g.data(), &[0, 0, 0, 0]);
}

#[test]
fn gradient_objective_decreases_left_to_right() {
    let o = to_objective_grid(&gradient(16, 4), 0.5).unwrap();
    for row in o.iter_rows() {
        assert!(row.windows(2).all(|w| w[0] >= w[1]), "row not monotone: {row:?}");
    }
}

#[test]
fn coarse_checkerboard_survives_halving() {
    // 4px cells shrink to 2px cells without blending.
    let g = to_collision_grid(&checkerboard(8, 8, 4, 0, 255), 0.5).unwrap();
    assert_eq!(g.row(0), &[1, 1, 0, 0]);
    assert_eq!(g.row(3), &[0, 0, 1, 1]);
}

#[test]
fn rgb_and_gray_paths_agree_on_neutral_pixels() {
    let gray = uniform_gray(3, 3, 121);
    let rgb = image::DynamicImage::ImageRgb8(gray.to_rgb8());
    assert_eq!(gray.to_gray(), rgb.to_gray());
    assert_eq!(
        to_collision_grid(&gray, 1.0).unwrap(),
        to_collision_grid(&rgb, 1.0).unwrap()
    );
}

proptest! {
    #[test]
    fn collision_cells_are_binary(
        w in 1u32..40,
        h in 1u32..40,
        seed in any::<u64>(),
        scalar in 0.05f64..3.0,
    ) {
        let g = to_collision_grid(&noise_rgb(w, h, seed), scalar).unwrap();
        prop_assert_eq!(g.rows(), expected_dim(h, scalar));
        prop_assert_eq!(g.cols(), expected_dim(w, scalar));
        prop_assert!(g.data().iter().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn objective_cells_are_unit_interval(
        w in 1u32..40,
        h in 1u32..40,
        seed in any::<u64>(),
        scalar in 0.05f64..3.0,
    ) {
        let o = to_objective_grid(&noise_gray(w, h, seed), scalar).unwrap();
        prop_assert_eq!(o.rows(), expected_dim(h, scalar));
        prop_assert_eq!(o.cols(), expected_dim(w, scalar));
        prop_assert!(o.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn decoded_gray_matches_raw_grid(
        w in 1u32..30,
        h in 1u32..30,
        seed in any::<u64>(),
        scalar in 0.1f64..2.0,
    ) {
        let img = noise_gray(w, h, seed);
        let raw = gray_grid(&img);
        prop_assert_eq!(
            to_collision_grid(&img, scalar).unwrap(),
            to_collision_grid(&raw, scalar).unwrap()
        );
        prop_assert_eq!(
            to_objective_grid(&img, scalar).unwrap(),
            to_objective_grid(&raw, scalar).unwrap()
        );
    }

    #[test]
    fn unit_scalar_keeps_dimensions(w in 1u32..30, h in 1u32..30, seed in any::<u64>()) {
        let img = noise_gray(w, h, seed);
        let o = to_objective_grid(&img, 1.0).unwrap();
        prop_assert_eq!((o.rows(), o.cols()), (h as usize, w as usize));
    }
}

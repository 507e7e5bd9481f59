//! Reusable image fixtures and asset-tree scaffolding.
//!
//! - [`uniform_gray`], [`checkerboard`], [`gradient`], [`gray_from_rows`]:
//!   hand-shaped 8-bit grayscale images.
//! - [`noise_gray`], [`noise_rgb`]: seeded random images (`ChaCha8Rng`),
//!   identical for a given seed on every platform.
//! - [`AssetTree`]: writes category/asset directories and source images
//!   under a caller-owned root (typically a `tempfile::TempDir`).

use std::fs;
use std::path::{Path, PathBuf};

use gridcast_core::GrayGrid;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A `width x height` image with every pixel set to `value`.
pub fn uniform_gray(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Alternating `dark`/`light` cells of `cell` pixels, dark at the origin.
pub fn checkerboard(width: u32, height: u32, cell: u32, dark: u8, light: u8) -> DynamicImage {
    let cell = cell.max(1);
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Luma([dark])
        } else {
            Luma([light])
        }
    }))
}

/// Horizontal ramp from 0 at the left column to 255 at the right column.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    let span = width.saturating_sub(1).max(1);
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
        Luma([((x * 255) / span) as u8])
    }))
}

/// Build a grayscale image from explicit rows (all rows must match in length).
pub fn gray_from_rows(rows: &[&[u8]]) -> DynamicImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        Luma([rows[y as usize][x as usize]])
    }))
}

/// Seeded uniform-noise grayscale image.
pub fn noise_gray(width: u32, height: u32, seed: u64) -> DynamicImage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |_, _| {
        Luma([rng.random::<u8>()])
    }))
}

/// Seeded uniform-noise RGB image.
pub fn noise_rgb(width: u32, height: u32, seed: u64) -> DynamicImage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |_, _| {
        Rgb([rng.random::<u8>(), rng.random::<u8>(), rng.random::<u8>()])
    }))
}

/// Flatten a grayscale fixture into a [`GrayGrid`] without any luma math.
pub fn gray_grid(image: &DynamicImage) -> GrayGrid {
    let gray = image.to_luma8();
    let (w, h) = gray.dimensions();
    GrayGrid::from_vec(h as usize, w as usize, gray.into_raw()).expect("luma buffer matches dims")
}

/// On-disk asset layout: `<root>/<category_dir>/<asset>/<files>`.
///
/// Panics on I/O failure; intended for tests only.
pub struct AssetTree {
    root: PathBuf,
}

impl AssetTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        fs::create_dir_all(&root).expect("create asset root");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create (if needed) and return the category directory.
    pub fn category(&self, category_dir: &str) -> PathBuf {
        let dir = self.root.join(category_dir);
        fs::create_dir_all(&dir).expect("create category dir");
        dir
    }

    /// Create (if needed) and return an empty asset directory.
    pub fn asset(&self, category_dir: &str, asset: &str) -> PathBuf {
        let dir = self.category(category_dir).join(asset);
        fs::create_dir_all(&dir).expect("create asset dir");
        dir
    }

    /// Save `image` as PNG at `<asset>/<file_name>`.
    pub fn image(
        &self,
        category_dir: &str,
        asset: &str,
        file_name: &str,
        image: &DynamicImage,
    ) -> PathBuf {
        let path = self.asset(category_dir, asset).join(file_name);
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .expect("save fixture image");
        path
    }

    /// Write raw `contents` at `<asset>/<file_name>`.
    pub fn file(&self, category_dir: &str, asset: &str, file_name: &str, contents: &str) -> PathBuf {
        let path = self.asset(category_dir, asset).join(file_name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_starts_dark() {
        let img = checkerboard(4, 4, 2, 0, 255).to_luma8();
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(2, 0).0, [255]);
        assert_eq!(img.get_pixel(2, 2).0, [0]);
    }

    #[test]
    fn gradient_spans_full_range() {
        let img = gradient(5, 1).to_luma8();
        assert_eq!(img.get_pixel(0, 0).0, [0]);
        assert_eq!(img.get_pixel(4, 0).0, [255]);
    }

    #[test]
    fn noise_is_deterministic() {
        assert_eq!(noise_rgb(8, 8, 7), noise_rgb(8, 8, 7));
        assert_ne!(noise_gray(8, 8, 1), noise_gray(8, 8, 2));
    }

    #[test]
    fn gray_grid_is_row_major() {
        let g = gray_grid(&gray_from_rows(&[&[1, 2, 3], &[4, 5, 6]]));
        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert_eq!(g.data(), &[1, 2, 3, 4, 5, 6]);
    }
}

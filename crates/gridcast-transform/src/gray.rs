//! Grayscale reduction.
//!
//! Colour sources are reduced with BT.601 luma weights
//! (`0.299 R + 0.587 G + 0.114 B`) in 14-bit fixed point,
//! `(4899 R + 9617 G + 1868 B + 8192) >> 14`. This is the integer form
//! OpenCV's `BGR2GRAY` uses, so pixels near the collision threshold land
//! on the same side as in grids produced by OpenCV-based tools. Alpha is
//! ignored. 8-bit grayscale passes through untouched.

use gridcast_core::GrayGrid;
use image::{DynamicImage, GrayImage, RgbImage};

/// A source that can be reduced to a single-channel 8-bit grid.
pub trait Grayscale {
    /// Produce the grayscale grid, one cell per source pixel.
    fn to_gray(&self) -> GrayGrid;
}

const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// BT.601 luma of one RGB sample, in 14-bit fixed point.
#[inline]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b);
    // The weights sum to 1 << 14, so the result never exceeds 255.
    ((y + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
}

fn grid_from_raw(width: u32, height: u32, raw: Vec<u8>) -> GrayGrid {
    // Callers collect exactly one sample per pixel.
    match GrayGrid::from_vec(height as usize, width as usize, raw) {
        Ok(grid) => grid,
        Err(_) => unreachable!("image buffer length matches its dimensions"),
    }
}

fn rgb_to_gray(rgb: &RgbImage) -> GrayGrid {
    let (w, h) = rgb.dimensions();
    let raw = rgb
        .pixels()
        .map(|p| luma_bt601(p.0[0], p.0[1], p.0[2]))
        .collect();
    grid_from_raw(w, h, raw)
}

impl Grayscale for GrayGrid {
    fn to_gray(&self) -> GrayGrid {
        self.clone()
    }
}

impl Grayscale for GrayImage {
    fn to_gray(&self) -> GrayGrid {
        // The backing buffer may be longer than width * height.
        let raw = self.pixels().map(|p| p.0[0]).collect();
        grid_from_raw(self.width(), self.height(), raw)
    }
}

impl Grayscale for RgbImage {
    fn to_gray(&self) -> GrayGrid {
        rgb_to_gray(self)
    }
}

impl Grayscale for DynamicImage {
    fn to_gray(&self) -> GrayGrid {
        match self {
            DynamicImage::ImageLuma8(g) => g.to_gray(),
            DynamicImage::ImageLumaA8(la) => {
                let raw = la.pixels().map(|p| p.0[0]).collect();
                grid_from_raw(la.width(), la.height(), raw)
            }
            other => rgb_to_gray(&other.to_rgb8()),
        }
    }
}

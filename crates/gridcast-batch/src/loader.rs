//! Image decoding seam.

use std::path::Path;

use image::{DynamicImage, ImageError};

/// Decodes the source image at a path.
///
/// Any `Fn(&Path) -> Result<DynamicImage, ImageError>` closure is a
/// loader, which lets tests serve in-memory images.
pub trait ImageLoader {
    /// Decode the image at `path`.
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError>;
}

/// Decodes with [`image::open`], guessing the format from the extension
/// and falling back to content sniffing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateLoader;

impl ImageLoader for ImageCrateLoader {
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
    }
}

impl<F> ImageLoader for F
where
    F: Fn(&Path) -> Result<DynamicImage, ImageError>,
{
    fn load(&self, path: &Path) -> Result<DynamicImage, ImageError> {
        self(path)
    }
}

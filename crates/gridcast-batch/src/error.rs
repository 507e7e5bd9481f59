//! Error types for batch conversion.
//!
//! These are the propagated failures: listing, decoding, transform, and
//! write errors stop the run and reach the caller unrecovered. An asset
//! directory without a source image is not an error; it aborts its
//! category and is reported through
//! [`CategoryOutcome`](crate::CategoryOutcome).

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use gridcast_io::GridIoError;
use gridcast_transform::TransformError;
use image::ImageError;

use crate::config::ConfigError;

/// Errors that stop a batch run.
#[derive(Debug)]
pub enum BatchError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A directory could not be enumerated.
    Listing {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A source image could not be decoded.
    Load {
        /// Image file.
        path: PathBuf,
        /// Underlying error.
        source: ImageError,
    },
    /// The grid transform rejected a source image.
    Transform {
        /// Source image file.
        path: PathBuf,
        /// Underlying error.
        source: TransformError,
    },
    /// The grid file could not be written.
    Write(GridIoError),
    /// The staged grid file could not be moved onto the marker path.
    Commit {
        /// Destination marker path.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Listing { path, source } => {
                write!(f, "cannot list {}: {source}", path.display())
            }
            Self::Load { path, source } => {
                write!(f, "cannot load image {}: {source}", path.display())
            }
            Self::Transform { path, source } => {
                write!(f, "cannot transform {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "cannot write grid: {e}"),
            Self::Commit { path, source } => {
                write!(f, "cannot commit grid to {}: {source}", path.display())
            }
        }
    }
}

impl Error for BatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Listing { source, .. } => Some(source),
            Self::Load { source, .. } => Some(source),
            Self::Transform { source, .. } => Some(source),
            Self::Write(e) => Some(e),
            Self::Commit { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for BatchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridIoError> for BatchError {
    fn from(e: GridIoError) -> Self {
        Self::Write(e)
    }
}

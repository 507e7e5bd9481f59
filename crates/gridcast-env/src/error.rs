//! Error types for opening grid environments.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use gridcast_batch::BatchError;
use gridcast_core::CoordError;
use gridcast_io::GridIoError;

/// Errors from building or opening a [`GridEnvironment`](crate::GridEnvironment).
#[derive(Debug)]
pub enum EnvError {
    /// The grid file could not be read or parsed.
    Read(GridIoError),
    /// On-demand conversion failed.
    Convert(BatchError),
    /// The grid has no cells.
    Extent(CoordError),
    /// The asset directory holds no source image to convert.
    NoSourceImage {
        /// The asset directory.
        directory: PathBuf,
    },
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "cannot read grid: {e}"),
            Self::Convert(e) => write!(f, "cannot convert asset: {e}"),
            Self::Extent(e) => write!(f, "unusable grid: {e}"),
            Self::NoSourceImage { directory } => {
                write!(f, "{} holds no source image", directory.display())
            }
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Convert(e) => Some(e),
            Self::Extent(e) => Some(e),
            Self::NoSourceImage { .. } => None,
        }
    }
}

impl From<GridIoError> for EnvError {
    fn from(e: GridIoError) -> Self {
        Self::Read(e)
    }
}

impl From<BatchError> for EnvError {
    fn from(e: BatchError) -> Self {
        Self::Convert(e)
    }
}

impl From<CoordError> for EnvError {
    fn from(e: CoordError) -> Self {
        Self::Extent(e)
    }
}

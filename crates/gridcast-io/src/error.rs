//! Error types for grid file I/O.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use gridcast_core::GridError;

/// Errors reading or writing grid text files.
#[derive(Debug)]
pub enum GridIoError {
    /// An I/O error on the given path.
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// An I/O error on an anonymous stream.
    Stream(io::Error),
    /// The text holds no grid rows.
    Empty,
    /// A cell token is not a number.
    InvalidCell {
        /// 1-based line number.
        line: usize,
        /// 1-based cell position within the line.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// A cell value is outside the set the grid kind allows.
    OutOfRange {
        /// 1-based line number.
        line: usize,
        /// 1-based cell position within the line.
        column: usize,
        /// The rejected value.
        value: f64,
    },
    /// Lines hold differing cell counts.
    Ragged {
        /// 1-based line number of the first mismatched line.
        line: usize,
        /// Cell count of line 1.
        expected: usize,
        /// Cell count of the mismatched line.
        found: usize,
    },
    /// Grid construction failed.
    Grid(GridError),
}

impl fmt::Display for GridIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Stream(e) => write!(f, "I/O error: {e}"),
            Self::Empty => write!(f, "grid text holds no rows"),
            Self::InvalidCell {
                line,
                column,
                token,
            } => write!(f, "line {line}, cell {column}: invalid number {token:?}"),
            Self::OutOfRange {
                line,
                column,
                value,
            } => write!(f, "line {line}, cell {column}: value {value} out of range"),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line} has {found} cells, expected {expected} to match line 1"
            ),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for GridIoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Stream(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridIoError {
    fn from(e: io::Error) -> Self {
        Self::Stream(e)
    }
}

impl From<GridError> for GridIoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl GridIoError {
    pub(crate) fn at(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

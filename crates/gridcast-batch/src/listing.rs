//! Directory enumeration seam.
//!
//! The converter never touches `std::fs::read_dir` directly. It asks a
//! [`DirectoryListing`] for the immediate subdirectories and files of a
//! path, and takes the first file the listing returns when an asset
//! directory holds several ("first in enumeration order"). Which order
//! that is belongs to the listing implementation.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Enumerates the immediate children of a directory.
pub trait DirectoryListing {
    /// Names of the immediate subdirectories of `path`.
    fn subdirectories(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Names of the immediate regular files in `path`.
    fn files(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Real filesystem listing.
///
/// Enumeration order is lexicographic by name, so "first file" is stable
/// across platforms. Entries whose names are not valid UTF-8 are skipped
/// with a warning. Symlinks are followed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsListing;

impl FsListing {
    fn entries(path: &Path, want_dirs: bool) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let meta = fs::metadata(entry.path())?;
            let keep = if want_dirs {
                meta.is_dir()
            } else {
                meta.is_file()
            };
            if !keep {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(
                    directory = %path.display(),
                    name = ?raw,
                    "skipping entry with non-UTF-8 name"
                ),
            }
        }
        names.sort();
        Ok(names)
    }
}

impl DirectoryListing for FsListing {
    fn subdirectories(&self, path: &Path) -> io::Result<Vec<String>> {
        Self::entries(path, true)
    }

    fn files(&self, path: &Path) -> io::Result<Vec<String>> {
        Self::entries(path, false)
    }
}

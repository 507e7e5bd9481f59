//! Batch conversion of asset directories into grid files.
//!
//! For each configured [`Category`], every asset directory under the
//! category root is converted into a `numeric_image.txt` grid file unless
//! that file already exists. The presence of the file is the only
//! completion signal; its contents are never validated.
//!
//! Filesystem enumeration and image decoding are injected through the
//! [`DirectoryListing`] and [`ImageLoader`] traits. [`FsListing`] and
//! [`ImageCrateLoader`] are the production implementations.
//!
//! Runs return a structured [`BatchReport`] rather than printing: each
//! category either completes or aborts at the first asset directory that
//! holds no source image, and non-fatal conditions are collected as
//! [`BatchWarning`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod converter;
pub mod error;
pub mod listing;
pub mod loader;
pub mod report;

pub use config::{BatchConfig, Category, ConfigError};
pub use converter::{AssetOutcome, BatchConverter};
pub use error::BatchError;
pub use listing::{DirectoryListing, FsListing};
pub use loader::{ImageCrateLoader, ImageLoader};
pub use report::{AbortReason, BatchReport, BatchWarning, CategoryOutcome, CategoryReport};

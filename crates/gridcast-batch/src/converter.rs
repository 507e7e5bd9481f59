//! The batch converter.
//!
//! [`BatchConverter::run`] walks each configured category in order. For
//! every asset directory it either skips (grid file present), converts
//! (exactly one source file, or the first of several with a warning), or
//! aborts the category (no source file). Conversion is
//! load → transform → write to a staging file → rename onto the marker
//! path, so an interrupted write never leaves a marker behind.

use std::fs;
use std::path::{Path, PathBuf};

use gridcast_io::{save_collision_grid, save_objective_grid};
use gridcast_transform::{to_collision_grid, to_objective_grid};
use tracing::{debug, error, info, warn};

use crate::config::{BatchConfig, Category, ConfigError};
use crate::error::BatchError;
use crate::listing::DirectoryListing;
use crate::loader::ImageLoader;
use crate::report::{AbortReason, BatchReport, BatchWarning, CategoryOutcome, CategoryReport};

/// What happened to a single asset directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetOutcome {
    /// The grid file already existed; nothing was read or written.
    Skipped,
    /// A grid was written from `source`.
    Converted {
        /// File name of the source image used.
        source: String,
        /// Set when the directory held more than one candidate file.
        warning: Option<BatchWarning>,
    },
    /// The directory holds no source image.
    NoSourceImage,
}

/// Converts asset directories into grid files.
///
/// Generic over the listing and loader so tests can pin enumeration order
/// and serve images from memory.
#[derive(Debug)]
pub struct BatchConverter<L, I> {
    config: BatchConfig,
    listing: L,
    loader: I,
}

impl<L: DirectoryListing, I: ImageLoader> BatchConverter<L, I> {
    /// Validate `config` and build a converter.
    pub fn new(config: BatchConfig, listing: L, loader: I) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            listing,
            loader,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Path of the grid/marker file for one asset.
    pub fn marker_path(&self, category: Category, asset: &str) -> PathBuf {
        self.config
            .category_root(category)
            .join(asset)
            .join(&self.config.marker_file_name)
    }

    /// Run every configured category in order.
    ///
    /// An aborted category does not stop later categories. Propagated
    /// errors stop the whole run.
    pub fn run(&self) -> Result<BatchReport, BatchError> {
        let mut report = BatchReport::default();
        for &category in &self.config.categories {
            report.insert(self.run_category(category)?);
        }
        Ok(report)
    }

    /// Convert every asset directory of one category.
    pub fn run_category(&self, category: Category) -> Result<CategoryReport, BatchError> {
        let root = self.config.category_root(category);
        let assets = self
            .listing
            .subdirectories(&root)
            .map_err(|source| BatchError::Listing {
                path: root.clone(),
                source,
            })?;

        let mut report = CategoryReport::new(category);
        for asset in assets {
            match self.convert_asset(category, &asset)? {
                AssetOutcome::Skipped => report.skipped.push(asset),
                AssetOutcome::Converted { warning, .. } => {
                    report.warnings.extend(warning);
                    report.converted.push(asset);
                }
                AssetOutcome::NoSourceImage => {
                    error!(
                        %category,
                        asset = %asset,
                        "asset directory holds no source image; aborting category"
                    );
                    report.outcome = CategoryOutcome::Aborted {
                        reason: AbortReason::NoSourceImage,
                        directory: asset,
                    };
                    return Ok(report);
                }
            }
        }

        info!(
            %category,
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            "category complete"
        );
        Ok(report)
    }

    /// Convert a single asset directory unless its grid file exists.
    pub fn convert_asset(&self, category: Category, asset: &str) -> Result<AssetOutcome, BatchError> {
        let dir = self.config.category_root(category).join(asset);
        let files = self
            .listing
            .files(&dir)
            .map_err(|source| BatchError::Listing {
                path: dir.clone(),
                source,
            })?;

        if files.iter().any(|f| *f == self.config.marker_file_name) {
            debug!(%category, asset, "grid file present; skipping");
            return Ok(AssetOutcome::Skipped);
        }

        let staging_name = self.config.staging_file_name();
        let sources: Vec<&String> = files.iter().filter(|f| **f != staging_name).collect();
        let Some(&source) = sources.first() else {
            return Ok(AssetOutcome::NoSourceImage);
        };

        let warning = (sources.len() > 1).then(|| {
            warn!(
                %category,
                asset,
                count = sources.len(),
                chosen = %source,
                "asset directory should hold one image; using the first"
            );
            BatchWarning::MultipleSourceFiles {
                directory: asset.to_string(),
                count: sources.len(),
                chosen: source.clone(),
            }
        });

        let source_path = dir.join(source);
        let staging_path = dir.join(&staging_name);
        let (rows, cols) = self.write_grid(category, &source_path, &staging_path)?;

        let marker_path = dir.join(&self.config.marker_file_name);
        fs::rename(&staging_path, &marker_path).map_err(|source| BatchError::Commit {
            path: marker_path.clone(),
            source,
        })?;

        info!(%category, asset, source = %source, rows, cols, "converted asset");
        Ok(AssetOutcome::Converted {
            source: source.clone(),
            warning,
        })
    }

    /// Load, transform, and write one grid to `out`. Returns its
    /// `(rows, cols)`.
    fn write_grid(
        &self,
        category: Category,
        source_path: &Path,
        out: &Path,
    ) -> Result<(usize, usize), BatchError> {
        let image = self
            .loader
            .load(source_path)
            .map_err(|source| BatchError::Load {
                path: source_path.to_path_buf(),
                source,
            })?;
        let scalar = self.config.resize_scalar;
        let transform_err = |source| BatchError::Transform {
            path: source_path.to_path_buf(),
            source,
        };

        match category {
            Category::Collision => {
                let grid = to_collision_grid(&image, scalar).map_err(transform_err)?;
                save_collision_grid(&grid, out)?;
                Ok((grid.rows(), grid.cols()))
            }
            Category::Objective => {
                let grid = to_objective_grid(&image, scalar).map_err(transform_err)?;
                save_objective_grid(&grid, out)?;
                Ok((grid.rows(), grid.cols()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;

    use image::{DynamicImage, GrayImage, ImageError, Luma};

    /// In-memory listing with a pinned enumeration order.
    #[derive(Default)]
    struct PinnedListing {
        dirs: HashMap<PathBuf, Vec<String>>,
        files: HashMap<PathBuf, Vec<String>>,
    }

    impl DirectoryListing for PinnedListing {
        fn subdirectories(&self, path: &Path) -> io::Result<Vec<String>> {
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn files(&self, path: &Path) -> io::Result<Vec<String>> {
            Ok(self.files.get(path).cloned().unwrap_or_default())
        }
    }

    fn white(_: &Path) -> Result<DynamicImage, ImageError> {
        Ok(DynamicImage::ImageLuma8(GrayImage::from_pixel(
            4,
            4,
            Luma([255]),
        )))
    }

    fn strs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn marker_present_skips_without_loading() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path());
        let asset = config.category_root(Category::Collision).join("maze");

        let mut listing = PinnedListing::default();
        listing
            .files
            .insert(asset, strs(&["maze.png", "numeric_image.txt"]));

        let panicking = |_: &Path| -> Result<DynamicImage, ImageError> {
            panic!("loader must not run for converted assets")
        };
        let conv = BatchConverter::new(config, listing, panicking).unwrap();
        assert_eq!(
            conv.convert_asset(Category::Collision, "maze").unwrap(),
            AssetOutcome::Skipped
        );
    }

    #[test]
    fn empty_asset_reports_no_source() {
        let dir = tempfile::tempdir().unwrap();
        let conv =
            BatchConverter::new(BatchConfig::new(dir.path()), PinnedListing::default(), white)
                .unwrap();
        assert_eq!(
            conv.convert_asset(Category::Objective, "nothing").unwrap(),
            AssetOutcome::NoSourceImage
        );
    }

    #[test]
    fn staging_leftover_is_not_a_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path());
        let asset = config.category_root(Category::Collision).join("crashed");
        let mut listing = PinnedListing::default();
        listing
            .files
            .insert(asset, strs(&["numeric_image.txt.tmp"]));

        let conv = BatchConverter::new(config, listing, white).unwrap();
        assert_eq!(
            conv.convert_asset(Category::Collision, "crashed").unwrap(),
            AssetOutcome::NoSourceImage
        );
    }

    #[test]
    fn first_listed_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path());
        let asset = config.category_root(Category::Collision).join("pair");
        fs::create_dir_all(&asset).unwrap();

        let mut listing = PinnedListing::default();
        listing
            .files
            .insert(asset.clone(), strs(&["z_second.png", "a_first.png"]));

        let seen = std::cell::RefCell::new(Vec::new());
        let recording = |p: &Path| {
            seen.borrow_mut().push(p.to_path_buf());
            white(p)
        };
        let conv = BatchConverter::new(config, listing, recording).unwrap();
        let outcome = conv.convert_asset(Category::Collision, "pair").unwrap();

        assert_eq!(
            outcome,
            AssetOutcome::Converted {
                source: "z_second.png".into(),
                warning: Some(BatchWarning::MultipleSourceFiles {
                    directory: "pair".into(),
                    count: 2,
                    chosen: "z_second.png".into(),
                }),
            }
        );
        assert_eq!(*seen.borrow(), vec![asset.join("z_second.png")]);
        assert_eq!(
            fs::read_to_string(asset.join("numeric_image.txt")).unwrap(),
            "0,0,\n0,0,\n"
        );
        assert!(!asset.join("numeric_image.txt.tmp").exists());
    }

    #[test]
    fn abort_stops_at_first_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path());
        let root = config.category_root(Category::Objective);
        for name in ["a", "c"] {
            fs::create_dir_all(root.join(name)).unwrap();
        }

        let mut listing = PinnedListing::default();
        listing.dirs.insert(root.clone(), strs(&["a", "b", "c"]));
        listing.files.insert(root.join("a"), strs(&["a.png"]));
        listing.files.insert(root.join("c"), strs(&["c.png"]));

        let conv = BatchConverter::new(config, listing, white).unwrap();
        let report = conv.run_category(Category::Objective).unwrap();

        assert_eq!(report.converted, vec!["a"]);
        assert_eq!(
            report.outcome,
            CategoryOutcome::Aborted {
                reason: AbortReason::NoSourceImage,
                directory: "b".into(),
            }
        );
        assert!(root.join("a").join("numeric_image.txt").exists());
        assert!(!root.join("c").join("numeric_image.txt").exists());
    }

    #[test]
    fn abort_in_one_category_does_not_stop_the_next() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path());
        let collision = config.category_root(Category::Collision);
        let objective = config.category_root(Category::Objective);
        fs::create_dir_all(objective.join("goal")).unwrap();

        let mut listing = PinnedListing::default();
        listing.dirs.insert(collision, strs(&["empty"]));
        listing.dirs.insert(objective.clone(), strs(&["goal"]));
        listing.files.insert(objective.join("goal"), strs(&["goal.png"]));

        let conv = BatchConverter::new(config, listing, white).unwrap();
        let report = conv.run().unwrap();

        assert!(!report.get(Category::Collision).unwrap().is_completed());
        let obj = report.get(Category::Objective).unwrap();
        assert!(obj.is_completed());
        assert_eq!(obj.converted, vec!["goal"]);
    }

    #[test]
    fn missing_category_root_is_a_listing_error() {
        let dir = tempfile::tempdir().unwrap();
        let conv =
            BatchConverter::new(BatchConfig::new(dir.path()), PinnedListing::default(), white)
                .unwrap();
        match conv.run() {
            Err(BatchError::Listing { path, .. }) => {
                assert!(path.ends_with("collision_images"))
            }
            other => panic!("expected Listing error, got {other:?}"),
        }
    }

    #[test]
    fn decode_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig::new(dir.path());
        let asset = config.category_root(Category::Collision).join("bad");
        let mut listing = PinnedListing::default();
        listing.files.insert(asset, strs(&["bad.png"]));

        let failing = |_: &Path| -> Result<DynamicImage, ImageError> {
            Err(ImageError::IoError(io::Error::from(io::ErrorKind::InvalidData)))
        };
        let conv = BatchConverter::new(config, listing, failing).unwrap();
        match conv.convert_asset(Category::Collision, "bad") {
            Err(BatchError::Load { path, .. }) => assert!(path.ends_with("bad/bad.png")),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = BatchConfig::new("/assets");
        config.resize_scalar = -1.0;
        match BatchConverter::new(config, PinnedListing::default(), white) {
            Err(ConfigError::InvalidScalar { .. }) => {}
            other => panic!("expected InvalidScalar, got {:?}", other.map(|_| ())),
        }
    }
}

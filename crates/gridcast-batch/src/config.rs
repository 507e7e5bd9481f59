//! Batch configuration, validation, and error types.
//!
//! [`BatchConfig`] names the asset root explicitly; nothing is resolved
//! relative to the executable or the working directory.
//! [`validate()`](BatchConfig::validate) checks every field before a
//! [`BatchConverter`](crate::BatchConverter) is built.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

// ── Category ───────────────────────────────────────────────────────

/// Kind of grid an asset category produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Binary obstacle grids.
    Collision,
    /// Normalised potential-field grids.
    Objective,
}

impl Category {
    /// Every category, in default run order.
    pub const ALL: [Category; 2] = [Category::Collision, Category::Objective];

    /// Short lowercase name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Collision => "collision",
            Self::Objective => "objective",
        }
    }

    /// Default directory name of this category under the asset root.
    pub fn default_dir_name(self) -> &'static str {
        match self {
            Self::Collision => "collision_images",
            Self::Objective => "objective_images",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BatchConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The asset root path is empty.
    EmptyRoot,
    /// resize_scalar is NaN, infinite, zero, or negative.
    InvalidScalar {
        /// The invalid value.
        value: f64,
    },
    /// A file or directory name is empty, `.`/`..`, or contains a path
    /// separator.
    InvalidName {
        /// Which setting held the name.
        field: &'static str,
        /// The rejected name.
        name: String,
    },
    /// No categories are configured.
    NoCategories,
    /// A category is listed more than once.
    DuplicateCategory {
        /// The repeated category.
        category: Category,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRoot => write!(f, "asset root path is empty"),
            Self::InvalidScalar { value } => {
                write!(f, "resize_scalar must be finite and positive, got {value}")
            }
            Self::InvalidName { field, name } => {
                write!(f, "{field} {name:?} is not a plain file name")
            }
            Self::NoCategories => write!(f, "no categories configured"),
            Self::DuplicateCategory { category } => {
                write!(f, "category {category} listed more than once")
            }
        }
    }
}

impl Error for ConfigError {}

// ── BatchConfig ────────────────────────────────────────────────────

/// Complete configuration for a batch conversion run.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    /// Directory holding one subdirectory per category.
    pub root: PathBuf,
    /// Multiplier applied to both image dimensions. Default: 0.5.
    pub resize_scalar: f64,
    /// Grid file written into each asset directory; its presence marks
    /// the asset as converted. Default: `numeric_image.txt`.
    pub marker_file_name: String,
    /// Categories to run, in order. Default: collision, then objective.
    pub categories: Vec<Category>,
    /// Collision category directory under `root`. Default: `collision_images`.
    pub collision_dir: String,
    /// Objective category directory under `root`. Default: `objective_images`.
    pub objective_dir: String,
}

impl BatchConfig {
    /// Default resize multiplier.
    pub const DEFAULT_RESIZE_SCALAR: f64 = 0.5;
    /// Default grid/marker file name.
    pub const DEFAULT_MARKER_FILE: &'static str = "numeric_image.txt";
    /// Suffix appended to the marker name while a grid is being written.
    pub const STAGING_SUFFIX: &'static str = ".tmp";

    /// Defaults for every setting except the asset root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            resize_scalar: Self::DEFAULT_RESIZE_SCALAR,
            marker_file_name: Self::DEFAULT_MARKER_FILE.to_string(),
            categories: Category::ALL.to_vec(),
            collision_dir: Category::Collision.default_dir_name().to_string(),
            objective_dir: Category::Objective.default_dir_name().to_string(),
        }
    }

    /// Validate all settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRoot);
        }
        if !self.resize_scalar.is_finite() || self.resize_scalar <= 0.0 {
            return Err(ConfigError::InvalidScalar {
                value: self.resize_scalar,
            });
        }
        check_name("marker_file_name", &self.marker_file_name)?;
        check_name("collision_dir", &self.collision_dir)?;
        check_name("objective_dir", &self.objective_dir)?;
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(ConfigError::DuplicateCategory {
                    category: *category,
                });
            }
        }
        Ok(())
    }

    /// Directory holding the asset directories of `category`.
    pub fn category_root(&self, category: Category) -> PathBuf {
        let dir = match category {
            Category::Collision => &self.collision_dir,
            Category::Objective => &self.objective_dir,
        };
        self.root.join(dir)
    }

    /// Name of the temporary file a grid is written to before it is
    /// renamed onto the marker.
    pub fn staging_file_name(&self) -> String {
        format!("{}{}", self.marker_file_name, Self::STAGING_SUFFIX)
    }
}

fn check_name(field: &'static str, name: &str) -> Result<(), ConfigError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);
    if bad {
        return Err(ConfigError::InvalidName {
            field,
            name: name.to_string(),
        });
    }
    Ok(())
}

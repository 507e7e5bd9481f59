//! Structured run results.

use std::fmt;

use indexmap::IndexMap;

use crate::config::Category;

/// Why a category stopped before visiting every asset directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// An unconverted asset directory holds no source image file.
    NoSourceImage,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSourceImage => write!(f, "asset directory holds no source image"),
        }
    }
}

/// Final state of one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// Every asset directory was converted or skipped.
    Completed,
    /// The run stopped at `directory`. Directories converted before it
    /// keep their grid files; directories after it were not visited.
    Aborted {
        /// Why the category stopped.
        reason: AbortReason,
        /// Asset directory name that caused the abort.
        directory: String,
    },
}

/// A non-fatal condition met while converting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchWarning {
    /// An asset directory holds more than one candidate source file;
    /// the first in enumeration order was used.
    MultipleSourceFiles {
        /// Asset directory name.
        directory: String,
        /// Number of candidate files found.
        count: usize,
        /// The file that was converted.
        chosen: String,
    },
}

impl fmt::Display for BatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleSourceFiles {
                directory,
                count,
                chosen,
            } => write!(
                f,
                "{directory}: {count} source files found, using first ({chosen})"
            ),
        }
    }
}

/// Result of running one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryReport {
    /// The category this report covers.
    pub category: Category,
    /// Whether the category completed or aborted.
    pub outcome: CategoryOutcome,
    /// Asset directories converted during this run, in visit order.
    pub converted: Vec<String>,
    /// Asset directories skipped because their grid file already existed.
    pub skipped: Vec<String>,
    /// Non-fatal conditions, in the order they occurred.
    pub warnings: Vec<BatchWarning>,
}

impl CategoryReport {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            category,
            outcome: CategoryOutcome::Completed,
            converted: Vec::new(),
            skipped: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// `true` unless the category aborted.
    pub fn is_completed(&self) -> bool {
        self.outcome == CategoryOutcome::Completed
    }
}

/// Result of a full run, one [`CategoryReport`] per category in run order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    categories: IndexMap<Category, CategoryReport>,
}

impl BatchReport {
    pub(crate) fn insert(&mut self, report: CategoryReport) {
        self.categories.insert(report.category, report);
    }

    /// Report for `category`, if it was run.
    pub fn get(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.get(&category)
    }

    /// Reports in run order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryReport> {
        self.categories.values()
    }

    /// `true` if every category that ran completed.
    pub fn all_completed(&self) -> bool {
        self.iter().all(CategoryReport::is_completed)
    }

    /// Every warning across all categories, in run order.
    pub fn warnings(&self) -> impl Iterator<Item = &BatchWarning> {
        self.iter().flat_map(|r| r.warnings.iter())
    }
}

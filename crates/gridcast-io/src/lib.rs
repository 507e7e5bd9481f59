//! Plain-text grid files for gridcast.
//!
//! A grid file holds one text line per grid row, cells separated by
//! commas. There is no header; dimensions are implied by the line count
//! and the cells per line.
//!
//! - Collision lines carry integer cells and end with a trailing comma:
//!   `0,1,0,\n`.
//! - Objective lines carry float cells with no trailing comma:
//!   `1.0,0.25,0.0\n`.
//!
//! Writers overwrite their target unconditionally. The reader accepts
//! both layouts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::GridIoError;
pub use reader::{load_grid, parse_collision_grid, parse_grid, parse_objective_grid};
pub use writer::{
    format_collision_grid, format_objective_grid, save_collision_grid, save_objective_grid,
    write_collision_grid, write_objective_grid,
};

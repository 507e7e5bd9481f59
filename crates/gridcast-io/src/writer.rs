//! Grid text writers.
//!
//! Rows are formatted into a reusable line buffer and written one line at
//! a time, so a writer never holds more than one row of text.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use gridcast_core::{CollisionGrid, ObjectiveGrid};

use crate::error::GridIoError;

/// Every collision cell, the last included, is followed by a comma.
fn push_collision_row(line: &mut String, row: &[u8]) {
    line.clear();
    for cell in row {
        // Writing into a String cannot fail.
        let _ = write!(line, "{cell},");
    }
    line.push('\n');
}

/// Objective cells use the shortest round-trip float form (`1.0`,
/// `0.25`), comma separated with no trailing comma.
fn push_objective_row(line: &mut String, row: &[f64]) {
    line.clear();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        let _ = write!(line, "{cell:?}");
    }
    line.push('\n');
}

/// Stream a collision grid as text.
pub fn write_collision_grid<W: Write>(grid: &CollisionGrid, mut out: W) -> io::Result<()> {
    let mut line = String::new();
    for row in grid.iter_rows() {
        push_collision_row(&mut line, row);
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

/// Stream an objective grid as text.
pub fn write_objective_grid<W: Write>(grid: &ObjectiveGrid, mut out: W) -> io::Result<()> {
    let mut line = String::new();
    for row in grid.iter_rows() {
        push_objective_row(&mut line, row);
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

/// Render a collision grid to a string.
///
/// ```
/// use gridcast_core::Grid;
/// use gridcast_io::format_collision_grid;
///
/// let g = Grid::from_rows(vec![vec![0u8, 0], vec![0, 0]]).unwrap();
/// assert_eq!(format_collision_grid(&g), "0,0,\n0,0,\n");
/// ```
pub fn format_collision_grid(grid: &CollisionGrid) -> String {
    let mut text = String::new();
    let mut line = String::new();
    for row in grid.iter_rows() {
        push_collision_row(&mut line, row);
        text.push_str(&line);
    }
    text
}

/// Render an objective grid to a string.
///
/// ```
/// use gridcast_core::Grid;
/// use gridcast_io::format_objective_grid;
///
/// let g = Grid::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// assert_eq!(format_objective_grid(&g), "1.0,0.0\n0.0,1.0\n");
/// ```
pub fn format_objective_grid(grid: &ObjectiveGrid) -> String {
    let mut text = String::new();
    let mut line = String::new();
    for row in grid.iter_rows() {
        push_objective_row(&mut line, row);
        text.push_str(&line);
    }
    text
}

/// Write a collision grid to `path`, replacing any existing file.
pub fn save_collision_grid(grid: &CollisionGrid, path: &Path) -> Result<(), GridIoError> {
    let file = File::create(path).map_err(GridIoError::at(path))?;
    write_collision_grid(grid, BufWriter::new(file)).map_err(GridIoError::at(path))
}

/// Write an objective grid to `path`, replacing any existing file.
pub fn save_objective_grid(grid: &ObjectiveGrid, path: &Path) -> Result<(), GridIoError> {
    let file = File::create(path).map_err(GridIoError::at(path))?;
    write_objective_grid(grid, BufWriter::new(file)).map_err(GridIoError::at(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcast_core::Grid;

    #[test]
    fn collision_rows_end_with_comma() {
        let g = Grid::from_rows(vec![vec![0u8, 1, 1], vec![1, 0, 0]]).unwrap();
        assert_eq!(format_collision_grid(&g), "0,1,1,\n1,0,0,\n");
    }

    #[test]
    fn single_cell_collision_row() {
        let g = Grid::from_rows(vec![vec![1u8]]).unwrap();
        assert_eq!(format_collision_grid(&g), "1,\n");
    }

    #[test]
    fn objective_keeps_fractional_part() {
        let g = Grid::from_rows(vec![vec![0.25, 1.0, 0.1]]).unwrap();
        assert_eq!(format_objective_grid(&g), "0.25,1.0,0.1\n");
    }

    #[test]
    fn single_cell_objective_row_has_no_comma() {
        let g = Grid::from_rows(vec![vec![0.5]]).unwrap();
        assert_eq!(format_objective_grid(&g), "0.5\n");
    }

    #[test]
    fn stream_matches_string() {
        let g = Grid::from_rows(vec![vec![0.75, 0.0], vec![1.0, 0.5]]).unwrap();
        let mut buf = Vec::new();
        write_objective_grid(&g, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format_objective_grid(&g));

        let c = Grid::from_rows(vec![vec![1u8, 0]]).unwrap();
        let mut buf = Vec::new();
        write_collision_grid(&c, &mut buf).unwrap();
        assert_eq!(buf, b"1,0,\n");
    }

    #[test]
    fn empty_grid_writes_nothing() {
        let g = Grid::<u8>::from_rows(vec![]).unwrap();
        assert_eq!(format_collision_grid(&g), "");
    }

    #[test]
    fn save_into_missing_directory_fails_with_path() {
        let g = Grid::from_rows(vec![vec![0u8]]).unwrap();
        let path = Path::new("/nonexistent-gridcast-dir/numeric_image.txt");
        match save_collision_grid(&g, path) {
            Err(GridIoError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

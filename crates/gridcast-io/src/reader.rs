//! Grid text reader.
//!
//! Lines are split on commas and empty tokens are skipped, so the
//! collision layout's trailing comma and the objective layout's bare
//! last cell parse alike. Blank lines at the end of the text are
//! ignored; dimensions are inferred from what remains.

use std::fs;
use std::path::Path;

use gridcast_core::{CollisionGrid, Grid, ObjectiveGrid};

use crate::error::GridIoError;

/// Parse grid text into a float grid.
///
/// ```
/// use gridcast_io::parse_grid;
///
/// let g = parse_grid("0,1,\n1,1,\n").unwrap();
/// assert_eq!((g.rows(), g.cols()), (2, 2));
/// assert_eq!(g.data(), &[0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn parse_grid(text: &str) -> Result<Grid<f64>, GridIoError> {
    let lines: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();
    if lines.iter().all(|l| l.trim().is_empty()) {
        return Err(GridIoError::Empty);
    }

    let mut cols = None;
    let mut data = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let before = data.len();
        for (j, token) in line
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .enumerate()
        {
            let value: f64 = token.parse().map_err(|_| GridIoError::InvalidCell {
                line: i + 1,
                column: j + 1,
                token: token.to_string(),
            })?;
            data.push(value);
        }
        let found = data.len() - before;
        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(GridIoError::Ragged {
                    line: i + 1,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
    }

    Ok(Grid::from_vec(lines.len(), cols.unwrap_or(0), data)?)
}

fn check_cells(
    grid: &Grid<f64>,
    allowed: impl Fn(f64) -> bool,
) -> Result<(), GridIoError> {
    let cols = grid.cols().max(1);
    match grid.data().iter().position(|&v| !allowed(v)) {
        Some(idx) => Err(GridIoError::OutOfRange {
            line: idx / cols + 1,
            column: idx % cols + 1,
            value: grid.data()[idx],
        }),
        None => Ok(()),
    }
}

/// Parse collision grid text, requiring every cell to be `0` or `1`.
pub fn parse_collision_grid(text: &str) -> Result<CollisionGrid, GridIoError> {
    let grid = parse_grid(text)?;
    check_cells(&grid, |v| v == 0.0 || v == 1.0)?;
    Ok(grid.map(|&v| v as u8))
}

/// Parse objective grid text, requiring every cell to lie in `[0, 1]`.
pub fn parse_objective_grid(text: &str) -> Result<ObjectiveGrid, GridIoError> {
    let grid = parse_grid(text)?;
    check_cells(&grid, |v| (0.0..=1.0).contains(&v))?;
    Ok(grid)
}

/// Read and parse the grid file at `path`.
pub fn load_grid(path: &Path) -> Result<Grid<f64>, GridIoError> {
    let text = fs::read_to_string(path).map_err(GridIoError::at(path))?;
    parse_grid(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_objective_layout() {
        let g = parse_grid("1.0,0.0\n0.0,1.0\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
        assert_eq!(g.data(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn tolerates_missing_final_newline_and_crlf() {
        let g = parse_grid("0,1,\r\n1,0,").unwrap();
        assert_eq!(g.data(), &[0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn empty_text_is_rejected() {
        for text in ["", "\n", "  \n\n"] {
            match parse_grid(text) {
                Err(GridIoError::Empty) => {}
                other => panic!("expected Empty for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_token_reports_position() {
        match parse_grid("0,1,\n1,x,\n") {
            Err(GridIoError::InvalidCell {
                line: 2,
                column: 2,
                token,
            }) => assert_eq!(token, "x"),
            other => panic!("expected InvalidCell, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        match parse_grid("0,1,\n1,\n") {
            Err(GridIoError::Ragged {
                line: 2,
                expected: 2,
                found: 1,
            }) => {}
            other => panic!("expected Ragged, got {other:?}"),
        }
    }

    #[test]
    fn collision_rejects_non_binary() {
        match parse_collision_grid("0,1,\n2,0,\n") {
            Err(GridIoError::OutOfRange {
                line: 2,
                column: 1,
                value,
            }) => assert_eq!(value, 2.0),
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn collision_parses_to_u8() {
        let g = parse_collision_grid("0,1,\n1,1,\n").unwrap();
        assert_eq!(g.data(), &[0u8, 1, 1, 1]);
    }

    #[test]
    fn objective_rejects_out_of_unit_range() {
        assert!(parse_objective_grid("0.5,1.5\n").is_err());
        assert!(parse_objective_grid("-0.1\n").is_err());
        assert!(parse_objective_grid("0.0,1.0\n").is_ok());
    }
}

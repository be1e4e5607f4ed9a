//! Text layouts, one line per row:
//!
//! ```text
//! ..A...
//! ..A...
//! XXA...
//! ......
//! ```
//!
//! `.` is a free cell, `X` is the goal car and every other glyph is a car made
//! of the straight run of cells carrying it. Cars are numbered in the order
//! their first cell appears, row by row.

use thiserror::Error;

use crate::board::{Board, BoardError, FREE};
use crate::car::{Car, Orientation};

pub const GOAL_GLYPH: char = 'X';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("cells marked '{glyph}' do not form a straight car")]
    BadShape { glyph: char },
    #[error(transparent)]
    Board(#[from] BoardError),
}

pub fn parse_board(name: &str, source: &str) -> Result<Board, LayoutError> {
    let rows: Vec<Vec<char>> = source
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.chars().collect())
        .collect();

    if rows.is_empty() {
        return Err(LayoutError::Empty);
    }

    let size = rows.len();
    let mut glyphs: Vec<(char, Vec<(usize, usize)>)> = Vec::new();

    for (r, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(LayoutError::Ragged {
                row: r,
                found: row.len(),
                expected: size,
            });
        }
        for (c, &glyph) in row.iter().enumerate() {
            if glyph == FREE {
                continue;
            }
            match glyphs.iter_mut().find(|(g, _)| *g == glyph) {
                Some((_, cells)) => cells.push((r, c)),
                None => glyphs.push((glyph, vec![(r, c)])),
            }
        }
    }

    let cars = glyphs
        .iter()
        .map(|(glyph, cells)| to_car(*glyph, cells))
        .collect::<Result<Vec<Car>, LayoutError>>()?;

    Ok(Board::new(name, size, cars)?)
}

/// Cells arrive in row-major order, so the first one is the car's leading cell.
fn to_car(glyph: char, cells: &[(usize, usize)]) -> Result<Car, LayoutError> {
    let (row, col) = cells[0];
    let length = cells.len();
    let is_goal = glyph == GOAL_GLYPH;

    let horizontal = cells
        .iter()
        .enumerate()
        .all(|(i, &(r, c))| r == row && c == col + i);
    let vertical = cells
        .iter()
        .enumerate()
        .all(|(i, &(r, c))| c == col && r == row + i);

    if horizontal {
        Ok(Car::new(Orientation::Horizontal, row, col, length, is_goal))
    } else if vertical {
        Ok(Car::new(Orientation::Vertical, col, row, length, is_goal))
    } else {
        Err(LayoutError::BadShape { glyph })
    }
}

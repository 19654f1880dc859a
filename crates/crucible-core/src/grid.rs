//! The [`Grid`] type — an immutable rectangle of per-cell entry costs.
//!
//! A `Grid` owns its costs in a flat row-major buffer and has no mutation
//! methods, so a single instance can be read by any number of searches at
//! once, including from different threads.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;
use crate::geom::{Direction, Pos};

/// Errors that can occur when building a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A character other than `'1'..='9'` was found.
    #[error("malformed grid: invalid cost {ch:?} at row {row}, column {col}")]
    Malformed { row: usize, col: usize, ch: char },
    /// Rows have inconsistent widths.
    #[error("malformed grid: row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Zero rows or zero columns.
    #[error("empty grid")]
    Empty,
}

impl GridError {
    /// Whether this error is a malformed-input error (bad character or
    /// ragged rows) as opposed to an empty grid.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Ragged { .. })
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of entry costs in `1..=9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    costs: Vec<u8>,
    width: usize,
    height: usize,
    max_cost: u8,
}

impl Grid {
    /// Build a grid from rows of ASCII digits.
    ///
    /// Every row must have the same length and contain only `'1'..='9'`.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut costs = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut max_cost = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let cost = match ch.to_digit(10) {
                    Some(d @ 1..=9) => d as u8,
                    _ => return Err(GridError::Malformed { row, col, ch }),
                };
                max_cost = max_cost.max(cost);
                costs.push(cost);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            costs,
            width,
            height,
            max_cost,
        })
    }

    /// Parse a whole puzzle input: one row of digits per line.
    ///
    /// Surrounding whitespace of the input is ignored, as are `\r\n` line
    /// endings.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        Self::from_rows(input.trim().lines())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Largest entry cost present in the grid.
    #[inline]
    pub fn max_cost(&self) -> u8 {
        self.max_cost
    }

    /// Top-left corner, where every search starts.
    #[inline]
    pub fn origin(&self) -> Pos {
        Pos::ZERO
    }

    /// Bottom-right corner, where every search ends.
    #[inline]
    pub fn goal(&self) -> Pos {
        Pos::new(self.height - 1, self.width - 1)
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.in_bounds(p.row, p.col)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.contains(p).then(|| p.row * self.width + p.col)
    }

    /// Entry cost of `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> Option<u8> {
        self.cost_at(Pos::new(row, col))
    }

    #[inline]
    pub fn cost_at(&self, p: Pos) -> Option<u8> {
        self.index(p).map(|i| self.costs[i])
    }

    pub fn cell(&self, p: Pos) -> Option<Cell> {
        self.cost_at(p).map(|cost| Cell::new(p, cost))
    }

    /// The in-bounds neighbour of `p` towards `dir`.
    #[inline]
    pub fn neighbor(&self, p: Pos, dir: Direction) -> Option<Pos> {
        p.step(dir).filter(|&n| self.contains(n))
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            grid: self,
            next: 0,
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.costs.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// Iterator over the [`Cell`]s of a [`Grid`], in row-major order.
pub struct Cells<'a> {
    grid: &'a Grid,
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let cost = *self.grid.costs.get(self.next)?;
        let pos = Pos::new(self.next / self.grid.width, self.next % self.grid.width);
        self.next += 1;
        Some(Cell::new(pos, cost))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.costs.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells<'_> {}

//! The [`Cell`] type — a grid position with its entry cost.

use crate::geom::Pos;

/// Read-only view of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    /// Heat lost when entering this cell, in `1..=9`.
    pub cost: u8,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Pos, cost: u8) -> Self {
        Self { pos, cost }
    }
}

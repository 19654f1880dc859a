//! **crucible-core** — cost grid and cardinal geometry for the crucible
//! search.
//!
//! This crate provides the foundational types shared by the search engine
//! and its front ends: positions and directions, the [`Heading`] of a move,
//! and the immutable cost [`Grid`] parsed from rows of digits.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Axis, Direction, Heading, Pos};
pub use grid::{Cells, Grid, GridError};

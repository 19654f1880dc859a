//! Geometry primitives: [`Pos`], [`Direction`], [`Axis`] and [`Heading`].
//!
//! Rows grow downwards and columns grow to the right, so `North` decreases
//! the row and `East` increases the column.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position. `row` grows down, `col` grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one step towards `dir`, or `None` if that would leave
    /// the non-negative quadrant. The far edges are checked by the grid.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::South => Some(Self::new(self.row + 1, self.col)),
            Direction::East => Some(Self::new(self.row, self.col + 1)),
            Direction::West => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Direction / Axis
// ---------------------------------------------------------------------------

/// Orientation of a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::East | Self::West => Axis::Horizontal,
        }
    }

    /// Whether `other` is a quarter turn away from `self`.
    #[inline]
    pub fn is_perpendicular(self, other: Direction) -> bool {
        self.axis() != other.axis()
    }

    /// Dense index in `0..4`, matching the order of [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// Arrow glyph used by path dumps.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::North => '^',
            Self::South => 'v',
            Self::East => '>',
            Self::West => '<',
        }
    }
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

/// How a search state was entered: either the origin, with no previous
/// move, or by moving in a direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Start,
    Moving(Direction),
}

impl Heading {
    /// The direction of the last move, if any.
    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Start => None,
            Self::Moving(d) => Some(d),
        }
    }

    /// Dense index in `0..5`; `Start` takes the last slot.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Moving(d) => d.index(),
            Self::Start => 4,
        }
    }

    /// Glyph used by path dumps; the origin is drawn as `o`.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Start => 'o',
            Self::Moving(d) => d.glyph(),
        }
    }
}

impl From<Direction> for Heading {
    fn from(d: Direction) -> Self {
        Self::Moving(d)
    }
}

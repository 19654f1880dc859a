//! Run-length constrained shortest paths on cost grids.
//!
//! The crucible starts on the top-left cell of a [`Grid`] and must reach
//! the bottom-right one, losing the entry cost of every cell it moves into.
//! It may never reverse, may go straight for at most `max_run` cells and
//! must go straight for at least `min_run` cells before it can turn or
//! stop.
//!
//! - **Search** with Dijkstra over `(cell, heading, run)` states
//!   ([`solve`], [`Crucible::search`])
//! - **Reconstruction** of the winning path ([`Solution::reconstruct_path`])
//! - **Dumps** of a path drawn over the grid ([`render_path`])
//!
//! # Frontiers
//!
//! | [`FrontierKind`] | Structure |
//! |---|---|
//! | `BinaryHeap` | [`HeapFrontier`], `O(log n)` per operation |
//! | `Buckets` | [`BucketFrontier`], amortised `O(1)` for costs in `1..=9` |

mod config;
mod error;
mod frontier;
mod path;
mod render;
mod search;
mod state;

pub use config::{FrontierKind, RunLimits};
pub use crucible_core::{Direction, Grid, GridError, Heading, Pos};
pub use error::SearchError;
pub use frontier::{BucketFrontier, Frontier, HeapFrontier};
pub use path::{PathStep, PathWalk, Run, Solution, reconstruct_path, runs};
pub use render::render_path;
pub use search::{Crucible, solve, solve_str};
pub use state::{SearchState, StateArena, StateId, StateKey, VisitedTable};

use crucible_core::{Direction, Grid, Heading};

use crate::config::{FrontierKind, RunLimits};
use crate::error::SearchError;
use crate::frontier::{BucketFrontier, Frontier, HeapFrontier};
use crate::path::Solution;
use crate::state::{SearchState, StateArena, VisitedTable};

/// Run-length constrained Dijkstra over one grid.
///
/// The search walks the augmented graph of `(cell, heading, run)` states
/// from the top-left corner to the bottom-right one. Every call to
/// [`search`](Self::search) owns its frontier, arena and visited table, so
/// one grid may be searched from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Crucible<'g> {
    grid: &'g Grid,
    limits: RunLimits,
    frontier: FrontierKind,
}

impl<'g> Crucible<'g> {
    pub fn new(grid: &'g Grid, limits: RunLimits) -> Self {
        Self {
            grid,
            limits,
            frontier: FrontierKind::default(),
        }
    }

    /// Select the priority structure (builder).
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn limits(&self) -> RunLimits {
        self.limits
    }

    /// Lowest heat loss from origin to goal.
    pub fn min_cost(&self) -> Result<u32, SearchError> {
        self.search().map(|s| s.cost())
    }

    /// Run the search and keep the winning state chain for reconstruction.
    pub fn search(&self) -> Result<Solution, SearchError> {
        self.limits.validate()?;
        match self.frontier {
            FrontierKind::BinaryHeap => self.run(HeapFrontier::new()),
            FrontierKind::Buckets => self.run(BucketFrontier::new(self.grid.max_cost())),
        }
    }

    fn run<F: Frontier>(&self, mut open: F) -> Result<Solution, SearchError> {
        let grid = self.grid;
        let limits = self.limits;
        let goal = grid.goal();

        log::debug!(
            "crucible search on {}x{} grid, runs {}..={}, {:?} frontier",
            grid.width(),
            grid.height(),
            limits.min_run,
            limits.max_run,
            self.frontier,
        );

        let mut arena = StateArena::with_capacity(grid.len() * 4);
        let mut visited = VisitedTable::new(grid, limits.max_run);
        let mut settled = 0usize;

        let start = arena.push(SearchState::start(grid.origin()));
        open.push(0, start);

        while let Some((cost, id)) = open.pop() {
            let current = arena[id];
            // Lazy deletion: a cheaper copy of this key was settled already.
            if !visited.insert(current.key()) {
                continue;
            }
            settled += 1;
            log::trace!(
                "settle {} heading {:?} run {} cost {}",
                current.pos,
                current.heading,
                current.run,
                cost
            );

            if current.pos == goal && limits.can_stop(current.heading, current.run) {
                log::debug!(
                    "crucible search done: cost {cost}, {settled} states settled, {} generated",
                    arena.len()
                );
                return Ok(Solution::new(arena, id, settled));
            }

            for dir in Direction::ALL {
                let Some(run) = limits.next_run(current.heading, current.run, dir) else {
                    continue;
                };
                let Some(next) = grid.neighbor(current.pos, dir) else {
                    continue;
                };
                let Some(step) = grid.cost_at(next) else {
                    continue;
                };
                let child = SearchState {
                    pos: next,
                    heading: Heading::Moving(dir),
                    run,
                    cost: cost + u32::from(step),
                    parent: Some(id),
                };
                if visited.contains(child.key()) {
                    continue;
                }
                let child_id = arena.push(child);
                open.push(child.cost, child_id);
            }
        }

        log::debug!(
            "crucible search exhausted after {settled} states, runs {}..={}",
            limits.min_run,
            limits.max_run
        );
        Err(SearchError::NoPathFound {
            min_run: limits.min_run,
            max_run: limits.max_run,
        })
    }
}

/// Lowest heat loss from the top-left to the bottom-right cell of `grid`,
/// moving in runs of `min_run..=max_run` straight steps.
pub fn solve(grid: &Grid, min_run: u32, max_run: u32) -> Result<u32, SearchError> {
    let limits = RunLimits::new(min_run, max_run)?;
    Crucible::new(grid, limits).min_cost()
}

/// Parse `input` as a grid of digits and [`solve`] it.
pub fn solve_str(input: &str, min_run: u32, max_run: u32) -> Result<u32, SearchError> {
    let grid = Grid::parse(input)?;
    solve(&grid, min_run, max_run)
}

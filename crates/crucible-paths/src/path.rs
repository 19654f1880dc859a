//! Path reconstruction from a finished search.

use crucible_core::{Direction, Heading, Pos};

use crate::state::{SearchState, StateArena, StateId};

/// One cell of a reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathStep {
    pub pos: Pos,
    /// How the cell was entered; `Heading::Start` for the origin.
    pub heading: Heading,
    /// Straight steps taken so far in `heading`.
    pub run: u32,
    /// Heat lost from the origin up to and including this cell.
    pub cost: u32,
}

impl From<&SearchState> for PathStep {
    fn from(s: &SearchState) -> Self {
        Self {
            pos: s.pos,
            heading: s.heading,
            run: s.run,
            cost: s.cost,
        }
    }
}

/// Outcome of a successful search: the minimal cost and the arena holding
/// the winning state chain.
#[derive(Debug, Clone)]
pub struct Solution {
    arena: StateArena,
    terminal: StateId,
    settled: usize,
}

impl Solution {
    pub(crate) fn new(arena: StateArena, terminal: StateId, settled: usize) -> Self {
        Self {
            arena,
            terminal,
            settled,
        }
    }

    /// Lowest heat loss from origin to goal.
    #[inline]
    pub fn cost(&self) -> u32 {
        self.arena[self.terminal].cost
    }

    /// The accepted goal state.
    #[inline]
    pub fn terminal(&self) -> &SearchState {
        &self.arena[self.terminal]
    }

    /// Number of states pushed during the search.
    pub fn states_generated(&self) -> usize {
        self.arena.len()
    }

    /// Number of distinct states expanded during the search.
    pub fn states_settled(&self) -> usize {
        self.settled
    }

    /// Walk the parent chain from the goal back to the origin.
    ///
    /// Each call starts a fresh walk; the chain itself is never modified.
    pub fn walk(&self) -> PathWalk<'_> {
        PathWalk {
            arena: &self.arena,
            next: Some(self.terminal),
        }
    }

    /// The winning path from origin to goal.
    pub fn reconstruct_path(&self) -> Vec<PathStep> {
        let mut path: Vec<PathStep> = self.walk().collect();
        path.reverse();
        path
    }
}

/// Rebuild the origin-to-goal path of `solution`.
pub fn reconstruct_path(solution: &Solution) -> Vec<PathStep> {
    solution.reconstruct_path()
}

/// Backward iterator over a parent chain, goal first.
pub struct PathWalk<'a> {
    arena: &'a StateArena,
    next: Option<StateId>,
}

impl Iterator for PathWalk<'_> {
    type Item = PathStep;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.arena.get(self.next?)?;
        self.next = state.parent;
        Some(PathStep::from(state))
    }
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// A maximal stretch of moves in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub direction: Direction,
    pub len: u32,
}

/// Split a path into its straight runs, in travel order.
pub fn runs(path: &[PathStep]) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    for dir in path.iter().filter_map(|s| s.heading.direction()) {
        match out.last_mut() {
            Some(last) if last.direction == dir => last.len += 1,
            _ => out.push(Run {
                direction: dir,
                len: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Crucible, RunLimits};
    use crucible_core::Grid;

    const SAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    fn solution(input: &str, limits: RunLimits) -> (Grid, Solution) {
        let grid = Grid::parse(input).unwrap();
        let sol = Crucible::new(&grid, limits).search().unwrap();
        (grid, sol)
    }

    fn check_path(grid: &Grid, sol: &Solution, limits: RunLimits) {
        let path = sol.reconstruct_path();
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_eq!(first.pos, grid.origin());
        assert_eq!(first.heading, Heading::Start);
        assert_eq!(first.cost, 0);
        assert_eq!(last.pos, grid.goal());
        assert_eq!(last.cost, sol.cost());

        let mut total = 0;
        for pair in path.windows(2) {
            let dir = pair[1].heading.direction().unwrap();
            assert_eq!(pair[0].pos.step(dir), Some(pair[1].pos));
            if let Some(prev) = pair[0].heading.direction() {
                assert_ne!(dir, prev.opposite());
            }
            total += u32::from(grid.cost_at(pair[1].pos).unwrap());
            assert_eq!(pair[1].cost, total);
        }
        assert_eq!(total, sol.cost());

        let runs = runs(&path);
        for r in &runs {
            assert!(r.len >= 1 && r.len <= limits.max_run, "{r:?}");
            assert!(r.len >= limits.min_run, "{r:?}");
        }
    }

    #[test]
    fn standard_path_is_valid() {
        let (grid, sol) = solution(SAMPLE, RunLimits::STANDARD);
        assert_eq!(sol.cost(), 102);
        check_path(&grid, &sol, RunLimits::STANDARD);
    }

    #[test]
    fn ultra_path_is_valid() {
        let (grid, sol) = solution(SAMPLE, RunLimits::ULTRA);
        assert_eq!(sol.cost(), 94);
        check_path(&grid, &sol, RunLimits::ULTRA);
        assert!(sol.states_settled() <= sol.states_generated());
    }

    #[test]
    fn walk_is_restartable() {
        let (_, sol) = solution(SAMPLE, RunLimits::STANDARD);
        let a: Vec<PathStep> = sol.walk().collect();
        let b: Vec<PathStep> = sol.walk().collect();
        assert_eq!(a, b);
        assert_eq!(a.first().map(|s| s.pos), Some(sol.terminal().pos));
        assert_eq!(reconstruct_path(&sol), sol.reconstruct_path());
    }

    #[test]
    fn single_cell_path() {
        let (_, sol) = solution("7", RunLimits::ULTRA);
        let path = sol.reconstruct_path();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].heading, Heading::Start);
        assert!(runs(&path).is_empty());
    }

    #[test]
    fn runs_group_directions() {
        let step = |heading| PathStep {
            pos: Pos::ZERO,
            heading,
            run: 0,
            cost: 0,
        };
        let path = [
            step(Heading::Start),
            step(Direction::East.into()),
            step(Direction::East.into()),
            step(Direction::South.into()),
            step(Direction::East.into()),
        ];
        assert_eq!(
            runs(&path),
            vec![
                Run {
                    direction: Direction::East,
                    len: 2
                },
                Run {
                    direction: Direction::South,
                    len: 1
                },
                Run {
                    direction: Direction::East,
                    len: 1
                },
            ]
        );
    }
}

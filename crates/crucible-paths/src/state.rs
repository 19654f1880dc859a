use std::ops::Index;

use crucible_core::{Grid, Heading, Pos};

/// Handle to a [`SearchState`] stored in a [`StateArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub const fn new(idx: usize) -> Self {
        Self(idx)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The unit of deduplication: two states with the same key have the same
/// future, so only the cheapest one is ever expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey {
    pub pos: Pos,
    pub heading: Heading,
    pub run: u32,
}

/// A node of the augmented search graph.
///
/// `cost` is the heat lost on every cell entered after the origin. The
/// parent link points backwards only; since costs strictly increase along
/// it, the links form a tree rooted at the origin state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    pub pos: Pos,
    pub heading: Heading,
    pub run: u32,
    pub cost: u32,
    pub parent: Option<StateId>,
}

impl SearchState {
    /// The root state: standing on `origin`, nothing entered yet.
    pub fn start(origin: Pos) -> Self {
        Self {
            pos: origin,
            heading: Heading::Start,
            run: 0,
            cost: 0,
            parent: None,
        }
    }

    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey {
            pos: self.pos,
            heading: self.heading,
            run: self.run,
        }
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Append-only storage for every state generated by one search.
#[derive(Debug, Clone, Default)]
pub struct StateArena {
    states: Vec<SearchState>,
}

impl StateArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, state: SearchState) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    #[inline]
    pub fn get(&self, id: StateId) -> Option<&SearchState> {
        self.states.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Index<StateId> for StateArena {
    type Output = SearchState;

    #[inline]
    fn index(&self, id: StateId) -> &SearchState {
        &self.states[id.0]
    }
}

// ---------------------------------------------------------------------------
// Visited table
// ---------------------------------------------------------------------------

/// Settled-key set for one search, stored as a flat table indexed by
/// cell, heading and run length.
///
/// A straight run can never be longer than the grid's larger side, so the
/// run dimension is capped there even when `max_run` is huge.
pub struct VisitedTable {
    seen: Vec<bool>,
    width: usize,
    run_slots: usize,
}

const HEADINGS: usize = 5;

impl VisitedTable {
    pub fn new(grid: &Grid, max_run: u32) -> Self {
        let longest = grid.width().max(grid.height());
        let run_slots = (max_run as usize).min(longest) + 1;
        Self {
            seen: vec![false; grid.len() * HEADINGS * run_slots],
            width: grid.width(),
            run_slots,
        }
    }

    #[inline]
    fn slot(&self, key: &StateKey) -> usize {
        let cell = key.pos.row * self.width + key.pos.col;
        (cell * HEADINGS + key.heading.index()) * self.run_slots + key.run as usize
    }

    /// Mark `key` as settled. Returns `true` if it was not settled before.
    #[inline]
    pub fn insert(&mut self, key: StateKey) -> bool {
        let slot = self.slot(&key);
        !std::mem::replace(&mut self.seen[slot], true)
    }

    #[inline]
    pub fn contains(&self, key: StateKey) -> bool {
        self.seen[self.slot(&key)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::Direction;

    #[test]
    fn arena_ids_are_sequential() {
        let mut arena = StateArena::default();
        let a = arena.push(SearchState::start(Pos::ZERO));
        let b = arena.push(SearchState {
            pos: Pos::new(0, 1),
            heading: Heading::Moving(Direction::East),
            run: 1,
            cost: 4,
            parent: Some(a),
        });
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[b].parent, Some(a));
        assert_eq!(arena.get(StateId::new(2)), None);
    }

    #[test]
    fn visited_insert_once() {
        let grid = Grid::parse("123\n456\n789").unwrap();
        let mut seen = VisitedTable::new(&grid, 3);
        let key = StateKey {
            pos: Pos::new(2, 2),
            heading: Heading::Moving(Direction::South),
            run: 2,
        };
        assert!(!seen.contains(key));
        assert!(seen.insert(key));
        assert!(!seen.insert(key));
        assert!(seen.contains(key));

        let other = StateKey { run: 1, ..key };
        assert!(!seen.contains(other));
        assert!(seen.insert(SearchState::start(Pos::ZERO).key()));
    }

    #[test]
    fn visited_run_is_capped_by_grid() {
        let grid = Grid::parse("12\n34").unwrap();
        let seen = VisitedTable::new(&grid, 1_000_000);
        assert_eq!(seen.run_slots, 3);
        assert_eq!(seen.seen.len(), 4 * HEADINGS * 3);
    }
}

//! Priority structures for the search frontier.
//!
//! Both implementations pop entries in non-decreasing cost order; ties are
//! broken differently, which never changes the cost a search returns.

use std::collections::BinaryHeap;

use crate::state::StateId;

/// Min-priority queue of states keyed by cumulative cost.
pub trait Frontier {
    /// Queue `id` with cumulative cost `cost`.
    fn push(&mut self, cost: u32, id: StateId);

    /// Remove and return a cheapest entry.
    fn pop(&mut self) -> Option<(u32, StateId)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Binary heap
// ---------------------------------------------------------------------------

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    cost: u32,
    id: StateId,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Frontier backed by [`BinaryHeap`].
#[derive(Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<NodeRef>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for HeapFrontier {
    #[inline]
    fn push(&mut self, cost: u32, id: StateId) {
        self.heap.push(NodeRef { cost, id });
    }

    #[inline]
    fn pop(&mut self) -> Option<(u32, StateId)> {
        self.heap.pop().map(|n| (n.cost, n.id))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// Bucket queue
// ---------------------------------------------------------------------------

/// Circular bucket queue (Dial's algorithm).
///
/// Every pushed cost must lie in `cursor..=cursor + max_step`, where
/// `cursor` is the cost of the last popped entry. Dijkstra with edge
/// weights bounded by `max_step` always satisfies this.
pub struct BucketFrontier {
    buckets: Vec<Vec<StateId>>,
    cursor: u32,
    len: usize,
}

impl BucketFrontier {
    /// Create a queue for edge weights in `1..=max_step`.
    pub fn new(max_step: u8) -> Self {
        let slots = usize::from(max_step.max(1)) + 1;
        Self {
            buckets: vec![Vec::new(); slots],
            cursor: 0,
            len: 0,
        }
    }

    #[inline]
    fn slot(&self, cost: u32) -> usize {
        cost as usize % self.buckets.len()
    }
}

impl Frontier for BucketFrontier {
    fn push(&mut self, cost: u32, id: StateId) {
        debug_assert!(
            cost >= self.cursor && ((cost - self.cursor) as usize) < self.buckets.len(),
            "cost {cost} outside bucket window at {}",
            self.cursor
        );
        let slot = self.slot(cost);
        self.buckets[slot].push(id);
        self.len += 1;
    }

    fn pop(&mut self) -> Option<(u32, StateId)> {
        if self.len == 0 {
            return None;
        }
        loop {
            let slot = self.slot(self.cursor);
            if let Some(id) = self.buckets[slot].pop() {
                self.len -= 1;
                return Some((self.cursor, id));
            }
            self.cursor += 1;
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

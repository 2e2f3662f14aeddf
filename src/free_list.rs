//! Free-List Table
//!
//! One FIFO queue of free ranges per order, `0..=max_order`. Every range
//! queued at order `k` has length exactly `2^k`, and all queued ranges
//! are pairwise disjoint and disjoint from every reservation.
//!
//! The queues are strictly FIFO: allocation takes from the head, freed
//! and split-off ranges go to the tail. Requests are therefore satisfied
//! from the earliest-queued block of the right size, not the lowest
//! address. Scenario-level outcomes depend on this discipline, so the
//! queues are never reordered or sorted.

use std::collections::VecDeque;

use crate::range::BlockRange;

/// Segregated free lists indexed by order
#[derive(Debug)]
pub(crate) struct FreeLists {
    queues: Vec<VecDeque<BlockRange>>,
}

impl FreeLists {
    /// Create the table for a pool of `2^max_order` blocks, seeded with
    /// the whole pool as a single free range at `max_order`
    pub(crate) fn new(max_order: usize) -> Self {
        let mut queues = vec![VecDeque::new(); max_order + 1];
        let pool = BlockRange::new(0, (1 << max_order) - 1);
        queues[max_order].push_back(pool);
        FreeLists { queues }
    }

    /// Whether the queue at `order` holds no ranges
    pub(crate) fn is_empty(&self, order: usize) -> bool {
        self.queues[order].is_empty()
    }

    /// Remove and return the head of the queue at `order`
    ///
    /// Callers check `is_empty` first; taking from an empty queue is a
    /// precondition violation.
    pub(crate) fn take_first(&mut self, order: usize) -> BlockRange {
        self.queues[order]
            .pop_front()
            .unwrap_or_else(|| panic!("take_first on empty free list at order {order}"))
    }

    /// Queue `range` at the tail of the list at `order`
    pub(crate) fn append(&mut self, order: usize, range: BlockRange) {
        debug_assert_eq!(range.order(), order);
        self.queues[order].push_back(range);
    }

    /// Remove and return the queued range at `order` starting at `start`,
    /// if one is queued
    pub(crate) fn find_and_remove(&mut self, order: usize, start: usize) -> Option<BlockRange> {
        let pos = self.queues[order].iter().position(|r| r.start == start)?;
        self.queues[order].remove(pos)
    }

    /// Iterate the queue at `order` in queue order
    pub(crate) fn iter_order(&self, order: usize) -> impl Iterator<Item = &BlockRange> {
        self.queues[order].iter()
    }

    /// Number of orders tracked (`max_order + 1`)
    pub(crate) fn order_count(&self) -> usize {
        self.queues.len()
    }
}

//! Allocator Engine
//!
//! `BuddyEngine` owns the Free-List Table and the Name Table together;
//! every operation touches both, so they are never handed out
//! separately. Reserve splits the first large-enough free range down to
//! the requested order; release merges the freed range with its buddy
//! repeatedly until the buddy is in use or the whole pool is whole
//! again.
//!
//! Both operations validate their arguments before mutating anything, so
//! a failed call leaves the tables exactly as they were.

use crate::free_list::FreeLists;
use crate::inspect::Snapshot;
use crate::names::NameTable;
use crate::order::{blocks_of, order_for};
use crate::range::BlockRange;
use crate::{BuddyError, Result};

/// Buddy-system pool manager over `pool_size` equal blocks
#[derive(Debug)]
pub struct BuddyEngine {
    free: FreeLists,
    names: NameTable,
    max_order: usize,
}

impl BuddyEngine {
    /// Create an engine managing a pool of `pool_size` blocks
    ///
    /// The whole pool starts free as a single range at the top order.
    ///
    /// # Errors
    /// Returns `InvalidPoolSize` unless `pool_size` is a positive power
    /// of two.
    pub fn new(pool_size: usize) -> Result<Self> {
        if pool_size == 0 || !pool_size.is_power_of_two() {
            return Err(BuddyError::InvalidPoolSize { size: pool_size });
        }

        let max_order = pool_size.trailing_zeros() as usize;
        log::debug!(
            "pool created: {} blocks, orders 0..={}",
            pool_size,
            max_order
        );

        Ok(BuddyEngine {
            free: FreeLists::new(max_order),
            names: NameTable::new(),
            max_order,
        })
    }

    /// Total number of blocks in the pool
    pub fn pool_size(&self) -> usize {
        blocks_of(self.max_order)
    }

    /// Largest order in the free-list table (`log2(pool_size)`)
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Range currently reserved under `name`, if any
    pub fn reservation(&self, name: &str) -> Option<BlockRange> {
        self.names.get(name)
    }

    /// Number of live reservations
    pub fn reserved_count(&self) -> usize {
        self.names.len()
    }

    /// Total blocks currently free, summed across all orders
    pub fn free_blocks(&self) -> usize {
        (0..=self.max_order)
            .map(|k| self.free.iter_order(k).count() * blocks_of(k))
            .sum()
    }

    /// Reserve `count` contiguous blocks under `name`
    ///
    /// The request is rounded up to the next power of two and satisfied
    /// from the head of the first non-empty free list at or above that
    /// order, splitting larger ranges down as needed.
    ///
    /// # Errors
    /// * `InvalidCount` - `count` is zero
    /// * `NameAlreadyReserved` - `name` already owns a range
    /// * `OutOfMemory` - no free range of sufficient size exists
    ///
    /// On any error, neither table is modified.
    pub fn reserve(&mut self, count: usize, name: &str) -> Result<BlockRange> {
        let target = order_for(count)?;

        if self.names.contains(name) {
            log::debug!("reserve {count} '{name}' rejected: name in use");
            return Err(BuddyError::NameAlreadyReserved {
                name: name.to_string(),
            });
        }

        // First non-empty list at or above the target. A request larger
        // than the pool has target > max_order, the scan range is empty,
        // and the request falls through to out-of-memory.
        let source = (target..=self.max_order).find(|&k| !self.free.is_empty(k));
        let Some(source) = source else {
            log::debug!("reserve {count} '{name}' rejected: out of memory");
            return Err(BuddyError::OutOfMemory { requested: count });
        };

        // Nothing can fail past this point; the split cascade and the
        // name insert commit together.
        let mut range = self.free.take_first(source);
        for order in (target..source).rev() {
            let (lower, upper) = range.halves();
            log::trace!("split {range} -> {lower} + {upper} (order {order})");
            self.free.append(order, upper);
            range = lower;
        }

        log::debug!("reserved {range} for '{name}' at order {target}");
        self.names.insert(name.to_string(), range);
        Ok(range)
    }

    /// Release the range reserved under `name`
    ///
    /// The freed range is merged with its buddy while the buddy is also
    /// free, climbing one order per merge, until the buddy is in use or
    /// the range spans the whole pool. The surviving range joins the
    /// free list at its final order.
    ///
    /// # Errors
    /// * `UnknownName` - `name` owns no range; the tables are untouched
    pub fn release(&mut self, name: &str) -> Result<()> {
        let Some(mut range) = self.names.remove(name) else {
            log::debug!("release '{name}' rejected: unknown name");
            return Err(BuddyError::UnknownName {
                name: name.to_string(),
            });
        };

        let mut order = range.order();
        while order < self.max_order {
            let Some(buddy) = self.free.find_and_remove(order, range.buddy_start()) else {
                break;
            };
            let merged = range.merge(buddy);
            log::trace!("merge {range} + {buddy} -> {merged} (order {})", order + 1);
            range = merged;
            order += 1;
        }

        log::debug!("released '{name}': {range} rejoins order {order}");
        self.free.append(order, range);
        Ok(())
    }

    /// Read-only snapshot of both tables for display
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            free_by_order: (0..self.free.order_count())
                .map(|k| self.free.iter_order(k).copied().collect())
                .collect(),
            reservations: self
                .names
                .iter()
                .map(|(name, range)| (name.clone(), *range))
                .collect(),
        }
    }
}

//! Inspector snapshot
//!
//! A `Snapshot` is a read-only copy of both tables taken at one point in
//! time: the free ranges per order, in queue order, and the live
//! reservations in name order. The engine never reads a snapshot back;
//! it exists for front ends that want to show the pool state.
//!
//! The `Display` impl is a convenience rendering; callers are free to
//! format the structured data themselves instead.

use core::fmt;

use crate::range::BlockRange;

/// Point-in-time view of the free lists and the name table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Free ranges per order, index `k` holding ranges of `2^k` blocks
    /// in queue (FIFO) order
    pub free_by_order: Vec<Vec<BlockRange>>,

    /// Live reservations as `(name, range)` pairs, sorted by name
    pub reservations: Vec<(String, BlockRange)>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "free lists:")?;
        for (order, queue) in self.free_by_order.iter().enumerate() {
            write!(f, "  order {order} ({} blocks):", 1usize << order)?;
            if queue.is_empty() {
                write!(f, " -")?;
            }
            for range in queue {
                write!(f, " {range}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "reservations:")?;
        if self.reservations.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (name, range) in &self.reservations {
            writeln!(f, "  {name}: {range} ({} blocks)", range.len())?;
        }
        Ok(())
    }
}

//! Block range value type
//!
//! A `BlockRange` is an inclusive pair of block indices whose length is
//! always a power of two. Ranges are never mutated in place; splitting
//! and merging produce new values, and whichever table holds a range
//! owns it exclusively.

use core::fmt;

use crate::order::blocks_of;

/// A contiguous run of blocks, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    /// Index of the first block in the range
    pub start: usize,

    /// Index of the last block in the range
    pub end: usize,
}

impl BlockRange {
    /// Create a range covering `start..=end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!((end - start + 1).is_power_of_two());
        BlockRange { start, end }
    }

    /// Number of blocks covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// The order of this range (length is always an exact power of two)
    pub fn order(&self) -> usize {
        self.len().trailing_zeros() as usize
    }

    /// Split into equal lower and upper halves
    pub fn halves(&self) -> (BlockRange, BlockRange) {
        let half = self.len() / 2;
        let lower = BlockRange::new(self.start, self.start + half - 1);
        let upper = BlockRange::new(self.start + half, self.end);
        (lower, upper)
    }

    /// Start index of this range's buddy at its own order
    ///
    /// A range at order `k` occupies block number `start / 2^k` within
    /// its size class. Even block numbers have their buddy immediately
    /// above; odd ones immediately below.
    pub fn buddy_start(&self) -> usize {
        let size = blocks_of(self.order());
        if (self.start / size) % 2 == 0 {
            self.start + size
        } else {
            self.start - size
        }
    }

    /// Merge with a buddy range into the next order up
    ///
    /// Caller guarantees `other` is this range's buddy: same order,
    /// adjacent, and together aligned to the next order.
    pub fn merge(&self, other: BlockRange) -> BlockRange {
        BlockRange::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_and_order() {
        let r = BlockRange::new(0, 7);
        assert_eq!(r.len(), 8);
        assert_eq!(r.order(), 3);

        let r = BlockRange::new(6, 7);
        assert_eq!(r.len(), 2);
        assert_eq!(r.order(), 1);
    }

    #[test]
    fn test_halves() {
        let (low, high) = BlockRange::new(0, 7).halves();
        assert_eq!(low, BlockRange::new(0, 3));
        assert_eq!(high, BlockRange::new(4, 7));

        let (low, high) = BlockRange::new(4, 7).halves();
        assert_eq!(low, BlockRange::new(4, 5));
        assert_eq!(high, BlockRange::new(6, 7));
    }

    #[test]
    fn test_buddy_start_even_and_odd() {
        // {0,3} is block 0 at order 2: buddy above at 4
        assert_eq!(BlockRange::new(0, 3).buddy_start(), 4);
        // {4,7} is block 1 at order 2: buddy below at 0
        assert_eq!(BlockRange::new(4, 7).buddy_start(), 0);
        // {6,7} is block 3 at order 1: buddy below at 4
        assert_eq!(BlockRange::new(6, 7).buddy_start(), 4);
        // {1,1} is block 1 at order 0: buddy below at 0
        assert_eq!(BlockRange::new(1, 1).buddy_start(), 0);
    }

    #[test]
    fn test_merge_spans_both() {
        let merged = BlockRange::new(4, 5).merge(BlockRange::new(6, 7));
        assert_eq!(merged, BlockRange::new(4, 7));

        let merged = BlockRange::new(6, 7).merge(BlockRange::new(4, 5));
        assert_eq!(merged, BlockRange::new(4, 7));
    }
}

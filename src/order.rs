//! Order arithmetic
//!
//! An order `k` names the size class holding ranges of exactly `2^k`
//! blocks. These two functions convert between requested block counts
//! and orders; both are pure.

use crate::{BuddyError, Result};

/// Smallest order whose block size covers `count` blocks
///
/// Total for every positive `count`: the exponent is computed from the
/// bit width of `count - 1`, never by materializing `2^k`, so counts
/// near `usize::MAX` yield an (unsatisfiable) order instead of
/// overflowing.
///
/// # Arguments
/// * `count` - Requested number of blocks (must be >= 1)
///
/// # Errors
/// Returns `InvalidCount` if `count` is zero.
pub fn order_for(count: usize) -> Result<usize> {
    if count < 1 {
        return Err(BuddyError::InvalidCount { count });
    }

    Ok((usize::BITS - (count - 1).leading_zeros()) as usize)
}

/// Number of blocks in a range of the given order (`2^order`)
pub fn blocks_of(order: usize) -> usize {
    1 << order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_for_exact_powers() {
        assert_eq!(order_for(1).unwrap(), 0);
        assert_eq!(order_for(2).unwrap(), 1);
        assert_eq!(order_for(4).unwrap(), 2);
        assert_eq!(order_for(1024).unwrap(), 10);
    }

    #[test]
    fn test_order_for_rounds_up() {
        assert_eq!(order_for(3).unwrap(), 2);
        assert_eq!(order_for(5).unwrap(), 3);
        assert_eq!(order_for(9).unwrap(), 4);
    }

    #[test]
    fn test_order_for_huge_counts_does_not_overflow() {
        // counts above 2^63 have no power-of-two cover within usize;
        // the order must still come back so callers can reject the
        // request as too large for their pool
        assert_eq!(order_for(1usize << 63).unwrap(), 63);
        assert_eq!(order_for((1usize << 63) + 1).unwrap(), 64);
        assert_eq!(order_for(usize::MAX).unwrap(), 64);
    }

    #[test]
    fn test_order_for_zero_is_invalid() {
        assert!(matches!(
            order_for(0),
            Err(BuddyError::InvalidCount { count: 0 })
        ));
    }

    #[test]
    fn test_blocks_of() {
        assert_eq!(blocks_of(0), 1);
        assert_eq!(blocks_of(3), 8);
        assert_eq!(blocks_of(order_for(7).unwrap()), 8);
    }
}

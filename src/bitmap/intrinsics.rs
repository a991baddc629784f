//! Single-word masks and population count.

use crate::constants::LAST_BIT;

/// Mask with only bit `idx` set.
///
/// # Arguments
/// * `idx` - Bit index (0-63)
#[inline]
pub fn bit(idx: u32) -> u64 {
    debug_assert!(idx <= LAST_BIT, "bit index out of bounds");
    1u64 << idx
}

/// Mask with bits `idx..=63` set.
///
/// # Arguments
/// * `idx` - First bit kept (0-63)
///
/// # Performance
/// O(1) - single shift
#[inline]
pub fn mask_from(idx: u32) -> u64 {
    debug_assert!(idx <= LAST_BIT, "bit index out of bounds");
    !0u64 << idx
}

/// Mask with bits `0..=idx` set.
///
/// # Arguments
/// * `idx` - Last bit kept (0-63)
///
/// # Performance
/// O(1) - single shift
#[inline]
pub fn mask_through(idx: u32) -> u64 {
    debug_assert!(idx <= LAST_BIT, "bit index out of bounds");
    !0u64 >> (LAST_BIT - idx)
}

/// Count set bits in a word.
///
/// Compiles to POPCNT where the target has it.
#[inline]
pub fn popcount(word: u64) -> u32 {
    word.count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit() {
        assert_eq!(bit(0), 1);
        assert_eq!(bit(5), 0b10_0000);
        assert_eq!(bit(63), 1u64 << 63);
    }

    #[test]
    fn test_mask_from() {
        assert_eq!(mask_from(0), !0u64);
        assert_eq!(mask_from(1), !1u64);
        assert_eq!(mask_from(63), 1u64 << 63);
    }

    #[test]
    fn test_mask_through() {
        assert_eq!(mask_through(0), 1);
        assert_eq!(mask_through(3), 0b1111);
        assert_eq!(mask_through(63), !0u64);
    }

    #[test]
    fn test_masks_partition_word() {
        for idx in 1..64 {
            assert_eq!(mask_from(idx) | mask_through(idx - 1), !0u64);
            assert_eq!(mask_from(idx) & mask_through(idx - 1), 0);
        }
    }

    #[test]
    fn test_popcount() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(0b1011), 3);
        assert_eq!(popcount(!0u64), 64);
    }
}

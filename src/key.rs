//! Element keys: conversion of caller integers into `i64` elements and the
//! split of an element into its (block, bit) coordinates.

use crate::constants::{BIT_MASK, BLOCK_SHIFT, MAX_BLOCK, MIN_BLOCK};
use crate::error::{Error, Result};

/// Convert a caller value into an element.
///
/// # Arguments
/// * `value` - Any integer convertible into `i64`
///
/// # Returns
/// The element, or `Error::Range` if the value does not fit in `i64`
///
/// # Example
/// ```ignore
/// assert_eq!(to_element(42u8), Ok(42));
/// assert_eq!(to_element(u64::MAX), Err(Error::Range));
/// ```
#[inline]
pub fn to_element<T: TryInto<i64>>(value: T) -> Result<i64> {
    value.try_into().map_err(|_| Error::Range)
}

/// Convert a caller value into an element, discarding unrepresentable ones.
///
/// Used by the total operations (membership test, non-strict removal) where
/// a value outside the element range simply cannot be a member.
#[inline]
pub fn lookup_element<T: TryInto<i64>>(value: T) -> Option<i64> {
    value.try_into().ok()
}

/// Block index holding `n` (floor division by 64).
#[inline]
pub fn block_of(n: i64) -> i64 {
    n >> BLOCK_SHIFT
}

/// Bit position of `n` within its block (0-63).
#[inline]
pub fn bit_of(n: i64) -> u32 {
    (n & BIT_MASK) as u32
}

/// Split an element into (block, bit).
#[inline]
pub fn split(n: i64) -> (i64, u32) {
    (block_of(n), bit_of(n))
}

/// Rebuild an element from its (block, bit) coordinates.
///
/// Inverse of [`split`]. Never overflows for blocks produced by `split`.
#[inline]
pub fn join(block: i64, bit: u32) -> i64 {
    debug_assert!(bit < 64, "bit out of bounds");
    debug_assert!((MIN_BLOCK..=MAX_BLOCK).contains(&block), "block out of bounds");
    (block << BLOCK_SHIFT) | bit as i64
}

/// Number of words between two block indices (`to - from`, saturating).
///
/// Spans that do not fit in `usize` saturate; any allocation of that size
/// fails in the collaborator long before the value matters.
#[inline]
pub fn span(from: i64, to: i64) -> usize {
    debug_assert!(from <= to, "span must not be negative");
    usize::try_from(to.wrapping_sub(from) as u64).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_element() {
        assert_eq!(to_element(42u8), Ok(42));
        assert_eq!(to_element(-1i32), Ok(-1));
        assert_eq!(to_element(i64::MAX), Ok(i64::MAX));
        assert_eq!(to_element(u64::MAX), Err(Error::Range));
        assert_eq!(to_element(i64::MAX as i128 + 1), Err(Error::Range));
        assert_eq!(to_element(i64::MIN as i128 - 1), Err(Error::Range));
    }

    #[test]
    fn test_lookup_element() {
        assert_eq!(lookup_element(7u16), Some(7));
        assert_eq!(lookup_element(u128::MAX), None);
    }

    #[test]
    fn test_split_positive() {
        assert_eq!(split(0), (0, 0));
        assert_eq!(split(63), (0, 63));
        assert_eq!(split(64), (1, 0));
        assert_eq!(split(1_000_000), (15_625, 0));
    }

    #[test]
    fn test_split_negative() {
        // Negative elements floor into the block below zero
        assert_eq!(split(-1), (-1, 63));
        assert_eq!(split(-64), (-1, 0));
        assert_eq!(split(-65), (-2, 63));
    }

    #[test]
    fn test_split_extremes() {
        assert_eq!(split(i64::MIN), (MIN_BLOCK, 0));
        assert_eq!(split(i64::MAX), (MAX_BLOCK, 63));
    }

    #[test]
    fn test_join_inverts_split() {
        for n in [0, 1, 63, 64, -1, -64, -65, 12_345, i64::MIN, i64::MAX] {
            let (block, bit) = split(n);
            assert_eq!(join(block, bit), n);
        }
    }

    #[test]
    fn test_span() {
        assert_eq!(span(3, 3), 0);
        assert_eq!(span(-2, 5), 7);
        assert_eq!(span(MIN_BLOCK, MAX_BLOCK), (1usize << 58) - 1);
    }
}

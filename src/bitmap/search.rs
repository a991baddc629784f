//! Search operations for finding set bits inside one word.

use crate::bitmap::{mask_from, mask_through};
use crate::constants::LAST_BIT;

/// Find the lowest set bit.
///
/// # Returns
/// Bit index of the lowest set bit, or None if the word is zero
///
/// # Performance
/// O(1) - TZCNT
#[inline]
pub fn lowest_set_bit(word: u64) -> Option<u32> {
    if word == 0 {
        None
    } else {
        Some(word.trailing_zeros())
    }
}

/// Find the highest set bit.
///
/// # Returns
/// Bit index of the highest set bit, or None if the word is zero
///
/// # Performance
/// O(1) - LZCNT
#[inline]
pub fn highest_set_bit(word: u64) -> Option<u32> {
    if word == 0 {
        None
    } else {
        Some(LAST_BIT - word.leading_zeros())
    }
}

/// Find the lowest set bit at or above `from`.
///
/// # Arguments
/// * `word` - Word to scan
/// * `from` - First bit index considered (0-63, inclusive)
#[inline]
pub fn next_in_word(word: u64, from: u32) -> Option<u32> {
    lowest_set_bit(word & mask_from(from))
}

/// Find the highest set bit at or below `from`.
///
/// # Arguments
/// * `word` - Word to scan
/// * `from` - Last bit index considered (0-63, inclusive)
#[inline]
pub fn prev_in_word(word: u64, from: u32) -> Option<u32> {
    highest_set_bit(word & mask_through(from))
}

//! Forward/backward scans for set bits across word boundaries.

use crate::bitmap::{highest_set_bit, lowest_set_bit, next_in_word, prev_in_word};
use crate::chunks::ChunkStore;
use crate::constants::LAST_BIT;
use crate::key;

impl ChunkStore {
    /// Find the smallest set element `>= from`.
    ///
    /// # Arguments
    /// * `from` - Absolute element position to start at (inclusive)
    ///
    /// # Returns
    /// The element, or None if no set bit lies at or after `from`
    ///
    /// # Performance
    /// O(1) within the starting word, then skips zero words one load each
    pub fn find_next_set(&self, from: i64) -> Option<i64> {
        let (offset, words) = self.parts()?;
        let end = offset + words.len() as i64;
        let (block, b) = key::split(from);
        if block >= end {
            return None;
        }

        // Start position inside the window; anything before it starts at bit 0
        let (start, start_bit) = if block < offset {
            (0, 0)
        } else {
            (key::span(offset, block), b)
        };

        if let Some(found) = next_in_word(words[start], start_bit) {
            return Some(key::join(offset + start as i64, found));
        }

        let (skip, &word) = words
            .range(start + 1..)
            .enumerate()
            .find(|&(_, &w)| w != 0)?;
        let idx = start + 1 + skip;
        lowest_set_bit(word).map(|found| key::join(offset + idx as i64, found))
    }

    /// Find the largest set element `<= from`.
    ///
    /// # Arguments
    /// * `from` - Absolute element position to start at (inclusive)
    ///
    /// # Returns
    /// The element, or None if no set bit lies at or before `from`
    pub fn find_prev_set(&self, from: i64) -> Option<i64> {
        let (offset, words) = self.parts()?;
        let last = words.len().checked_sub(1)?;
        let (block, b) = key::split(from);
        if block < offset {
            return None;
        }

        let (start, start_bit) = if block > offset + last as i64 {
            (last, LAST_BIT)
        } else {
            (key::span(offset, block), b)
        };

        if let Some(found) = prev_in_word(words[start], start_bit) {
            return Some(key::join(offset + start as i64, found));
        }

        let idx = words.range(..start).rposition(|&w| w != 0)?;
        highest_set_bit(words[idx]).map(|found| key::join(offset + idx as i64, found))
    }

    /// Smallest set element.
    #[inline]
    pub fn first_set(&self) -> Option<i64> {
        self.find_next_set(i64::MIN)
    }

    /// Largest set element.
    #[inline]
    pub fn last_set(&self) -> Option<i64> {
        self.find_prev_set(i64::MAX)
    }
}

//! Chunk store representation and single-bit access.

use alloc::collections::VecDeque;

use crate::bitmap::{self, bit};
use crate::key;

/// Ordered run of 64-bit words plus the block index of the first word.
///
/// # States
/// - `Empty`: nothing allocated, the set is guaranteed empty. A fresh store
///   and a cleared store are both in this state.
/// - `Populated`: `words` is non-empty and contiguous; word `i` covers block
///   `offset + i`. Words may be zero.
///
/// Every code path that needs the offset has to match on the state, so there
/// is no sentinel offset value to collide with.
///
/// # Example
/// ```ignore
/// let mut store = ChunkStore::new();
/// store.assign(130, true);
/// assert_eq!(store.offset(), Some(2));
/// assert!(store.test(130));
/// ```
#[derive(Debug, Clone, Default)]
pub enum ChunkStore {
    #[default]
    Empty,
    Populated {
        /// Block index of `words[0]`
        offset: i64,
        /// Membership words, never empty in this state
        words: VecDeque<u64>,
    },
}

impl ChunkStore {
    /// Create an empty store.
    ///
    /// # Performance
    /// O(1) - no allocation until the first bit is set
    pub const fn new() -> Self {
        ChunkStore::Empty
    }

    /// Create a populated store from raw parts.
    ///
    /// Returns `Empty` when `words` is empty.
    #[cfg(test)]
    pub fn from_parts(offset: i64, words: VecDeque<u64>) -> Self {
        if words.is_empty() {
            ChunkStore::Empty
        } else {
            ChunkStore::Populated { offset, words }
        }
    }

    /// Borrow offset and words, or None when empty.
    #[inline]
    pub fn parts(&self) -> Option<(i64, &VecDeque<u64>)> {
        match self {
            ChunkStore::Empty => None,
            ChunkStore::Populated { offset, words } => Some((*offset, words)),
        }
    }

    /// Mutably borrow offset and words, or None when empty.
    #[inline]
    pub fn parts_mut(&mut self) -> Option<(&mut i64, &mut VecDeque<u64>)> {
        match self {
            ChunkStore::Empty => None,
            ChunkStore::Populated { offset, words } => Some((offset, words)),
        }
    }

    /// Block index of the first stored word.
    #[cfg(test)]
    pub fn offset(&self) -> Option<i64> {
        self.parts().map(|(offset, _)| offset)
    }

    /// Half-open block range `[first, end)` covered by the stored words.
    #[inline]
    pub fn bounds(&self) -> Option<(i64, i64)> {
        self.parts()
            .map(|(offset, words)| (offset, offset + words.len() as i64))
    }

    /// Number of stored words, slack included.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.parts().map_or(0, |(_, words)| words.len())
    }

    /// Word covering `block`, or 0 when the block lies outside the window.
    #[inline]
    pub fn word(&self, block: i64) -> u64 {
        self.index_of(block)
            .and_then(|idx| self.parts().map(|(_, words)| words[idx]))
            .unwrap_or(0)
    }

    /// Position of `block` inside `words`, if allocated.
    #[inline]
    pub fn index_of(&self, block: i64) -> Option<usize> {
        let (first, end) = self.bounds()?;
        if block < first || block >= end {
            return None;
        }
        Some(key::span(first, block))
    }

    /// Check whether the bit for element `n` is set.
    ///
    /// # Returns
    /// `false` for elements outside the allocated window (no allocation)
    ///
    /// # Performance
    /// O(1) - one range check and one word load
    #[inline]
    pub fn test(&self, n: i64) -> bool {
        let (block, b) = key::split(n);
        self.word(block) & bit(b) != 0
    }

    /// Set or clear the bit for element `n`.
    ///
    /// Clearing a bit outside the window is a no-op. Setting one grows the
    /// window (zero-filled) until it covers `n`'s block; from `Empty` this
    /// anchors the offset at that block with a single word.
    ///
    /// # Returns
    /// `true` if the bit changed
    ///
    /// # Performance
    /// O(1) amortized when the window already covers `n`, otherwise
    /// proportional to the number of words added
    pub fn assign(&mut self, n: i64, value: bool) -> bool {
        let (block, b) = key::split(n);
        let mask = bit(b);

        if !value {
            let Some(idx) = self.index_of(block) else {
                return false;
            };
            let Some((_, words)) = self.parts_mut() else {
                return false;
            };
            let before = words[idx];
            words[idx] &= !mask;
            return before != words[idx];
        }

        let idx = self.cover(block);
        let Some((_, words)) = self.parts_mut() else {
            return false;
        };
        let before = words[idx];
        words[idx] |= mask;
        before != words[idx]
    }

    /// Check whether every stored word is zero.
    ///
    /// True for `Empty` and for populated stores whose words are all slack.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.parts()
            .map_or(true, |(_, words)| bitmap::all_zero(words))
    }

    /// Number of set bits.
    ///
    /// # Performance
    /// O(n) - one POPCNT per stored word, recomputed on every call
    #[inline]
    pub fn count(&self) -> usize {
        self.parts()
            .map_or(0, |(_, words)| bitmap::count_ones(words))
    }

    /// Drop every word and return to `Empty`.
    #[inline]
    pub fn clear(&mut self) {
        *self = ChunkStore::Empty;
    }

    /// Check whether nothing is allocated.
    #[inline]
    pub fn is_unallocated(&self) -> bool {
        matches!(self, ChunkStore::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = ChunkStore::new();
        assert!(store.is_unallocated());
        assert!(store.is_zero());
        assert_eq!(store.offset(), None);
        assert_eq!(store.word_count(), 0);
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_from_parts_empty_words() {
        let store = ChunkStore::from_parts(5, VecDeque::new());
        assert!(store.is_unallocated());
    }

    #[test]
    fn test_first_assign_anchors_offset() {
        let mut store = ChunkStore::new();
        assert!(store.assign(130, true));
        assert_eq!(store.offset(), Some(2));
        assert_eq!(store.word_count(), 1);
        assert!(store.test(130));
        assert!(!store.test(131));
    }

    #[test]
    fn test_assign_returns_change() {
        let mut store = ChunkStore::new();
        assert!(store.assign(7, true));
        assert!(!store.assign(7, true));
        assert!(store.assign(7, false));
        assert!(!store.assign(7, false));
    }

    #[test]
    fn test_clear_outside_window_is_noop() {
        let mut store = ChunkStore::new();
        assert!(!store.assign(1_000, false));
        assert!(store.is_unallocated());

        store.assign(10, true);
        assert!(!store.assign(1_000_000, false));
        assert_eq!(store.word_count(), 1);
    }

    #[test]
    fn test_grow_forward_zero_fills() {
        let mut store = ChunkStore::new();
        store.assign(0, true);
        store.assign(64 * 4 + 1, true);

        assert_eq!(store.offset(), Some(0));
        assert_eq!(store.word_count(), 5);
        assert_eq!(store.word(1), 0);
        assert_eq!(store.word(2), 0);
        assert_eq!(store.word(3), 0);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_grow_backward_shifts_offset() {
        let mut store = ChunkStore::new();
        store.assign(200, true);
        store.assign(-1, true);

        assert_eq!(store.offset(), Some(-1));
        assert_eq!(store.bounds(), Some((-1, 4)));
        assert!(store.test(-1));
        assert!(store.test(200));
        assert_eq!(store.word(0), 0);
    }

    #[test]
    fn test_test_outside_window() {
        let mut store = ChunkStore::new();
        assert!(!store.test(0));

        store.assign(64, true);
        assert!(!store.test(0));
        assert!(!store.test(i64::MAX));
        assert!(!store.test(i64::MIN));
        assert_eq!(store.word_count(), 1);
    }

    #[test]
    fn test_is_zero_with_slack() {
        let mut store = ChunkStore::new();
        store.assign(3, true);
        store.assign(500, true);
        store.assign(3, false);
        store.assign(500, false);

        assert!(!store.is_unallocated());
        assert!(store.is_zero());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_extreme_elements() {
        let mut low = ChunkStore::new();
        low.assign(i64::MIN, true);
        assert!(low.test(i64::MIN));
        assert!(!low.test(i64::MIN + 1));

        let mut high = ChunkStore::new();
        high.assign(i64::MAX, true);
        assert!(high.test(i64::MAX));
        assert!(!high.test(i64::MAX - 1));
    }
}

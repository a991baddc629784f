//! Zero-trimmed view of a chunk store, the basis of equality and hashing.

use core::hash::{Hash, Hasher};

use alloc::collections::vec_deque;
use alloc::collections::VecDeque;

use crate::bitmap::{leading_zero_words, trailing_zero_words};
use crate::chunks::ChunkStore;

/// The nonzero core of a chunk store.
///
/// Leading and trailing zero words are skipped logically; the store is never
/// modified. Two stores holding the same elements produce equal windows no
/// matter how much slack their growth history left behind.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    /// Absolute block index of the first nonzero word
    start: i64,
    words: &'a VecDeque<u64>,
    /// Index range `[lo, hi)` of the nonzero core inside `words`
    lo: usize,
    hi: usize,
}

impl<'a> Window<'a> {
    /// Absolute block index of the first nonzero word.
    #[inline]
    pub fn start_block(&self) -> i64 {
        self.start
    }

    /// Number of words between the first and last nonzero word, inclusive.
    #[inline]
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    /// Words of the trimmed window, first to last.
    #[inline]
    pub fn words(&self) -> vec_deque::Iter<'a, u64> {
        self.words.range(self.lo..self.hi)
    }
}

impl ChunkStore {
    /// Trimmed view of the stored words.
    ///
    /// # Returns
    /// None when no bit is set (`Empty` or all slack)
    ///
    /// # Performance
    /// O(z) - z is the number of slack words skipped at both ends
    pub fn window(&self) -> Option<Window<'_>> {
        let (offset, words) = self.parts()?;
        let lo = leading_zero_words(words);
        if lo == words.len() {
            return None;
        }
        let hi = words.len() - trailing_zero_words(words);

        Some(Window {
            start: offset + lo as i64,
            words,
            lo,
            hi,
        })
    }
}

impl PartialEq for Window<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.len() == other.len() && self.words().eq(other.words())
    }
}

impl Eq for Window<'_> {}

impl Hash for Window<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.start);
        state.write_usize(self.len());
        for &word in self.words() {
            state.write_u64(word);
        }
    }
}

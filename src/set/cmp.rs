//! Equality, hashing and subset relations.
//!
//! All comparisons go through the zero-trimmed window of each operand, so
//! slack words left by growth and removal never change the outcome.

use core::hash::{Hash, Hasher};

use crate::set::DenseSet;

impl PartialEq for DenseSet {
    /// Equal iff the trimmed windows start at the same block and hold the
    /// same words.
    fn eq(&self, other: &Self) -> bool {
        self.store.window() == other.store.window()
    }
}

impl Eq for DenseSet {}

impl Hash for DenseSet {
    /// Hashes the trimmed window, starting block included.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.store.window().hash(state);
    }
}

impl DenseSet {
    /// Check whether every element of `self` is in `other`.
    ///
    /// Equivalent to `self.intersection(other) == *self`, computed without
    /// building the intersection.
    ///
    /// # Performance
    /// O(words of `self`) - stops at the first word with a bit missing from `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        let Some(window) = self.store.window() else {
            return true;
        };
        let start = window.start_block();
        window
            .words()
            .enumerate()
            .all(|(idx, &word)| word & !other.store.word(start + idx as i64) == 0)
    }

    /// Check whether `self` is a subset of `other` and not equal to it.
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    /// Check whether every element of `other` is in `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Check whether `self` and `other` share no element.
    ///
    /// # Performance
    /// O(overlap of the two windows)
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Walk the shorter window, probing the other store word by word
        let (small, large_store) = match (self.store.window(), other.store.window()) {
            (Some(a), Some(b)) if a.len() <= b.len() => (a, &other.store),
            (Some(_), Some(b)) => (b, &self.store),
            _ => return true,
        };
        let start = small.start_block();
        small
            .words()
            .enumerate()
            .all(|(idx, &word)| word & large_store.word(start + idx as i64) == 0)
    }
}

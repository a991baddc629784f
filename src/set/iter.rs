//! Iterator support for DenseSet traversal.
//!
//! Iteration is a sequence of find-next / find-previous scans over the
//! chunk store. Each iterator keeps two absolute cursors, so every step
//! resumes right after the last element it produced instead of rescanning
//! from the start of the window.
//!
//! # Performance
//! - O(1) per element inside a word (TZCNT / LZCNT)
//! - One load per zero word skipped between elements

use core::iter::FusedIterator;
use core::ops::{Bound, RangeBounds};

use crate::chunks::ChunkStore;
use crate::set::DenseSet;

/// Inclusive `[front, back]` bounds still to be visited.
#[derive(Debug, Clone)]
struct Cursor {
    /// Smallest element not yet produced from the front
    front: i64,
    /// Largest element not yet produced from the back
    back: i64,
    /// Set once the cursors have crossed
    done: bool,
}

impl Cursor {
    fn new<R: RangeBounds<i64>>(range: R) -> Self {
        let front = match range.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_add(1),
            Bound::Unbounded => Some(i64::MIN),
        };
        let back = match range.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.checked_sub(1),
            Bound::Unbounded => Some(i64::MAX),
        };

        match (front, back) {
            (Some(front), Some(back)) if front <= back => Self {
                front,
                back,
                done: false,
            },
            _ => Self {
                front: 0,
                back: 0,
                done: true,
            },
        }
    }

    /// Produce the next element from the front.
    #[inline]
    fn advance(&mut self, store: &ChunkStore) -> Option<i64> {
        if self.done {
            return None;
        }
        match store.find_next_set(self.front).filter(|&n| n <= self.back) {
            Some(n) => {
                // front only moves when n < back, so n + 1 never overflows
                if n == self.back {
                    self.done = true;
                } else {
                    self.front = n + 1;
                }
                Some(n)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    /// Produce the next element from the back.
    #[inline]
    fn retreat(&mut self, store: &ChunkStore) -> Option<i64> {
        if self.done {
            return None;
        }
        match store.find_prev_set(self.back).filter(|&n| n >= self.front) {
            Some(n) => {
                if n == self.front {
                    self.done = true;
                } else {
                    self.back = n - 1;
                }
                Some(n)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Iterator over elements in ascending order.
///
/// Double-ended: `.rev()` walks from the largest element down.
///
/// # Example
/// ```rust
/// use dense_int_set::DenseSet;
///
/// let set = DenseSet::from([30, 10, 20]);
/// let up: Vec<i64> = set.iter().collect();
/// let down: Vec<i64> = set.iter().rev().collect();
/// assert_eq!(up, vec![10, 20, 30]);
/// assert_eq!(down, vec![30, 20, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    store: &'a ChunkStore,
    cursor: Cursor,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.cursor.advance(self.store)
    }

    fn min(mut self) -> Option<i64> {
        self.next()
    }

    fn max(mut self) -> Option<i64> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i64> {
        self.cursor.retreat(self.store)
    }
}

impl FusedIterator for Iter<'_> {}

/// Owning iterator over elements in ascending order.
#[derive(Debug, Clone)]
pub struct IntoIter {
    store: ChunkStore,
    cursor: Cursor,
}

impl Iterator for IntoIter {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        self.cursor.advance(&self.store)
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<i64> {
        self.cursor.retreat(&self.store)
    }
}

impl FusedIterator for IntoIter {}

impl DenseSet {
    /// Iterate over all elements in ascending order.
    ///
    /// Every call starts a fresh pass.
    ///
    /// # Performance
    /// O(1) - no work until the first `next()`
    pub fn iter(&self) -> Iter<'_> {
        self.range(..)
    }

    /// Iterate over the elements inside `range`, in ascending order.
    ///
    /// # Arguments
    /// * `range` - Range bounds (implements `RangeBounds<i64>`)
    ///
    /// # Example
    /// ```rust
    /// use dense_int_set::DenseSet;
    ///
    /// let set: DenseSet = (0..100).collect();
    /// let picked: Vec<i64> = set.range(10..15).collect();
    /// assert_eq!(picked, vec![10, 11, 12, 13, 14]);
    /// ```
    pub fn range<R: RangeBounds<i64>>(&self, range: R) -> Iter<'_> {
        Iter {
            store: &self.store,
            cursor: Cursor::new(range),
        }
    }

    /// Find the smallest element `>= from`.
    ///
    /// # Returns
    /// The element, or None if there is none at or after `from`
    #[inline]
    pub fn find_next(&self, from: i64) -> Option<i64> {
        self.store.find_next_set(from)
    }

    /// Find the largest element `<= from`.
    ///
    /// # Returns
    /// The element, or None if there is none at or before `from`
    #[inline]
    pub fn find_prev(&self, from: i64) -> Option<i64> {
        self.store.find_prev_set(from)
    }
}

impl<'a> IntoIterator for &'a DenseSet {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for DenseSet {
    type Item = i64;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            store: self.store,
            cursor: Cursor::new(..),
        }
    }
}

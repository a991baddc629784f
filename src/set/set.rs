//! Main DenseSet structure and membership operations.

use crate::chunks::ChunkStore;
use crate::constants::WORD_BITS;
use crate::error::{Error, Result};
use crate::key;

/// Which end of the set an extreme-element operation works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    /// Smallest element
    First,
    /// Largest element
    Last,
}

/// Set of `i64` values stored as bits in a sliding window of 64-bit words.
///
/// Suited to elements that cluster in a numeric range: memory and time
/// scale with the span of the stored range, not with the number of
/// elements. Widely scattered keys are better served by a hash set.
///
/// # Architecture
/// - One bit per integer, 64 integers per word
/// - The window starts at the block of the first element ever inserted and
///   grows at either end (amortized O(1) per word)
/// - Set algebra merges two windows in place, touching only the overlap and
///   whatever region the operator actually needs
///
/// # Performance Characteristics
/// - Insert / remove / contains: O(1) once the window covers the element
/// - Iteration: one TZCNT per element plus one load per zero word skipped
/// - `len()`: O(words), recomputed on every call
/// - Memory: `(max - min) / 64` words, whatever the element count
///
/// # Panics
/// Aborts on allocation failure when the elements span too wide a range,
/// e.g. `i64::MIN` and `i64::MAX` in one set would need 2^58 words.
///
/// # Example
/// ```rust
/// use dense_int_set::DenseSet;
///
/// let mut set = DenseSet::new();
/// set.insert(50).unwrap();
/// set.insert(-3).unwrap();
/// set.insert(17).unwrap();
///
/// assert!(set.contains(17));
/// assert_eq!(set.to_vec(), vec![-3, 17, 50]);
/// ```
#[derive(Clone, Default)]
pub struct DenseSet {
    /// Word storage
    pub(crate) store: ChunkStore,
}

impl DenseSet {
    /// Create a new empty set.
    ///
    /// # Performance
    /// O(1) - nothing is allocated until the first insertion
    pub const fn new() -> Self {
        Self {
            store: ChunkStore::new(),
        }
    }

    /// Insert an element.
    ///
    /// # Arguments
    /// * `value` - Any integer convertible into `i64`
    ///
    /// # Returns
    /// * `Ok(true)` if the element was newly inserted
    /// * `Ok(false)` if it was already present
    /// * `Err(Error::Range)` if the value does not fit in `i64`
    ///
    /// # Performance
    /// O(1) amortized inside the window; growing the window costs one
    /// zero-filled word per block added
    ///
    /// # Panics
    /// Aborts on allocation failure if covering `value` needs more words
    /// than can be allocated (the window spans `(max - min) / 64` words)
    ///
    /// # Example
    /// ```rust
    /// use dense_int_set::{DenseSet, Error};
    ///
    /// let mut set = DenseSet::new();
    /// assert_eq!(set.insert(42), Ok(true));
    /// assert_eq!(set.insert(42), Ok(false));
    /// assert_eq!(set.insert(u64::MAX), Err(Error::Range));
    /// ```
    pub fn insert<T: TryInto<i64>>(&mut self, value: T) -> Result<bool> {
        let n = key::to_element(value)?;
        Ok(self.store.assign(n, true))
    }

    /// Remove an element.
    ///
    /// Removing an absent or unrepresentable value is a no-op.
    ///
    /// # Returns
    /// `true` if the element was present
    pub fn remove<T: TryInto<i64>>(&mut self, value: T) -> bool {
        key::lookup_element(value).is_some_and(|n| self.store.assign(n, false))
    }

    /// Check whether an element is present.
    ///
    /// Unrepresentable values are never members.
    ///
    /// # Performance
    /// O(1) - one range check and one word load
    #[inline]
    pub fn contains<T: TryInto<i64>>(&self, value: T) -> bool {
        key::lookup_element(value).is_some_and(|n| self.store.test(n))
    }

    /// Flip the membership of an element.
    ///
    /// # Returns
    /// * `Ok(true)` if the element is now present
    /// * `Ok(false)` if it was removed
    /// * `Err(Error::Range)` if the value does not fit in `i64`
    pub fn toggle<T: TryInto<i64>>(&mut self, value: T) -> Result<bool> {
        let n = key::to_element(value)?;
        let present = !self.store.test(n);
        self.store.assign(n, present);
        Ok(present)
    }

    /// Remove an element and return it.
    ///
    /// # Returns
    /// The element, or `Error::KeyNotFound` if it was not a member
    ///
    /// # Example
    /// ```rust
    /// use dense_int_set::{DenseSet, Error};
    ///
    /// let mut set = DenseSet::from([7]);
    /// assert_eq!(set.take(7), Ok(7));
    /// assert_eq!(set.take(7), Err(Error::KeyNotFound(7)));
    /// ```
    pub fn take(&mut self, n: i64) -> Result<i64> {
        if self.store.assign(n, false) {
            Ok(n)
        } else {
            Err(Error::KeyNotFound(n))
        }
    }

    /// Remove an element and return it, or return `default` if absent.
    pub fn take_or(&mut self, n: i64, default: i64) -> i64 {
        self.take(n).unwrap_or(default)
    }

    /// Smallest element, or None if the set is empty.
    ///
    /// # Performance
    /// O(z) - z is the number of leading zero words
    #[inline]
    pub fn first(&self) -> Option<i64> {
        self.store.first_set()
    }

    /// Largest element, or None if the set is empty.
    #[inline]
    pub fn last(&self) -> Option<i64> {
        self.store.last_set()
    }

    /// Smallest element, or `Error::Empty`.
    pub fn try_first(&self) -> Result<i64> {
        self.first().ok_or(Error::Empty)
    }

    /// Largest element, or `Error::Empty`.
    pub fn try_last(&self) -> Result<i64> {
        self.last().ok_or(Error::Empty)
    }

    /// Remove and return the element at one end of the set.
    ///
    /// # Arguments
    /// * `end` - `Extreme::First` for the smallest, `Extreme::Last` for the largest
    ///
    /// # Returns
    /// The removed element, or `Error::Empty` if the set has none
    pub fn pop_extreme(&mut self, end: Extreme) -> Result<i64> {
        let n = match end {
            Extreme::First => self.first(),
            Extreme::Last => self.last(),
        }
        .ok_or(Error::Empty)?;
        self.store.assign(n, false);
        Ok(n)
    }

    /// Remove and return the smallest element.
    #[inline]
    pub fn pop_first(&mut self) -> Result<i64> {
        self.pop_extreme(Extreme::First)
    }

    /// Remove and return the largest element.
    #[inline]
    pub fn pop_last(&mut self) -> Result<i64> {
        self.pop_extreme(Extreme::Last)
    }

    /// Number of elements.
    ///
    /// # Performance
    /// O(words) - population count over every stored word on each call
    #[inline]
    pub fn len(&self) -> usize {
        self.store.count()
    }

    /// Check whether the set has no elements.
    ///
    /// The window may still hold zero words left over from removals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_zero()
    }

    /// Remove every element and release the window.
    ///
    /// A cleared set is indistinguishable from a new one; the next insertion
    /// picks a fresh offset.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Reserve room for the window to cover `additional` more elements.
    ///
    /// A hint only; ignored until the first insertion allocates the window.
    pub fn reserve(&mut self, additional: usize) {
        self.store.reserve(additional.div_ceil(WORD_BITS as usize));
    }

    /// Number of words currently allocated, slack included.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.store.word_count()
    }
}

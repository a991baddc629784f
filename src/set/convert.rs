//! Construction from element sequences and conversion back out.

use alloc::vec::Vec;
use core::fmt;

use crate::error::Result;
use crate::key;
use crate::set::DenseSet;

impl DenseSet {
    /// Build a set from any sequence of integers convertible into `i64`.
    ///
    /// Duplicates collapse to a single element.
    ///
    /// # Returns
    /// The set, or `Error::Range` at the first value that does not fit in `i64`
    ///
    /// # Example
    /// ```rust
    /// use dense_int_set::{DenseSet, Error};
    ///
    /// let set = DenseSet::try_from_elements([3u64, 1, 3]).unwrap();
    /// assert_eq!(set.to_vec(), vec![1, 3]);
    ///
    /// assert_eq!(DenseSet::try_from_elements([u64::MAX]), Err(Error::Range));
    /// ```
    pub fn try_from_elements<I, T>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i64>,
    {
        let mut set = DenseSet::new();
        for value in values {
            let n = key::to_element(value)?;
            set.store.assign(n, true);
        }
        Ok(set)
    }

    /// Collect the elements into a vector, ascending.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl FromIterator<i64> for DenseSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = DenseSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<i64> for DenseSet {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for n in iter {
            self.store.assign(n, true);
        }
    }
}

impl<'a> Extend<&'a i64> for DenseSet {
    fn extend<I: IntoIterator<Item = &'a i64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<const N: usize> From<[i64; N]> for DenseSet {
    fn from(values: [i64; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[i64]> for DenseSet {
    fn from(values: &[i64]) -> Self {
        values.iter().copied().collect()
    }
}

impl fmt::Debug for DenseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn test_duplicates_collapse() {
        let set = DenseSet::from([5, 5, -5, 5, 0, -5]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_vec(), [-5, 0, 5]);
    }

    #[test]
    fn test_from_slice() {
        let values: &[i64] = &[100, -100, 100];
        assert_eq!(DenseSet::from(values).to_vec(), [-100, 100]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut set: DenseSet = (0..5).collect();
        set.extend([10, 11]);
        set.extend(&[4, 12]);
        set.extend(vec![-1].iter());
        assert_eq!(set.to_vec(), [-1, 0, 1, 2, 3, 4, 10, 11, 12]);
    }

    #[test]
    fn test_try_from_elements() {
        let set = DenseSet::try_from_elements([1u32, 2, 2, 70]).unwrap();
        assert_eq!(set.to_vec(), [1, 2, 70]);

        let low = i128::from(i64::MIN);
        let set = DenseSet::try_from_elements([low + 70, low]).unwrap();
        assert_eq!(set.to_vec(), [i64::MIN, i64::MIN + 70]);
        assert_eq!(set.word_count(), 2);

        assert_eq!(
            DenseSet::try_from_elements([1u64, 1 << 63]),
            Err(Error::Range)
        );
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", DenseSet::new()), "{}");
        assert_eq!(format!("{:?}", DenseSet::from([3, -1, 2])), "{-1, 2, 3}");
    }
}

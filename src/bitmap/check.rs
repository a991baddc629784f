//! State checks over runs of words.

use crate::bitmap::popcount;

/// Check whether every word in the run is zero.
///
/// # Performance
/// O(n) - stops at the first nonzero word
#[inline]
pub fn all_zero<'a, I>(words: I) -> bool
where
    I: IntoIterator<Item = &'a u64>,
{
    words.into_iter().all(|&w| w == 0)
}

/// Total number of set bits in the run.
///
/// # Performance
/// O(n) - one POPCNT per word
#[inline]
pub fn count_ones<'a, I>(words: I) -> usize
where
    I: IntoIterator<Item = &'a u64>,
{
    words.into_iter().map(|&w| popcount(w) as usize).sum()
}

/// Number of zero words before the first nonzero one.
///
/// Equals the run length when every word is zero.
#[inline]
pub fn leading_zero_words<'a, I>(words: I) -> usize
where
    I: IntoIterator<Item = &'a u64>,
{
    words.into_iter().take_while(|&&w| w == 0).count()
}

/// Number of zero words after the last nonzero one.
///
/// Equals the run length when every word is zero.
#[inline]
pub fn trailing_zero_words<'a, I>(words: I) -> usize
where
    I: IntoIterator<Item = &'a u64>,
    I::IntoIter: DoubleEndedIterator,
{
    words.into_iter().rev().take_while(|&&w| w == 0).count()
}

//! Word-level bit manipulation for the chunk store.
//!
//! Helpers here work on a single `u64` word or on a run of words and know
//! nothing about block offsets; `chunks` translates elements into the
//! (word, bit) coordinates these functions take.

mod check;
mod intrinsics;
mod search;

pub use check::{all_zero, count_ones, leading_zero_words, trailing_zero_words};
pub use intrinsics::{bit, mask_from, mask_through, popcount};
pub use search::{highest_set_bit, lowest_set_bit, next_in_word, prev_in_word};

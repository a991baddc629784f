//! # dense-int-set
//!
//! Set of `i64` values stored as a sliding window of 64-bit words.
//! Memory and time scale with the span of the stored range, not with the
//! number of elements.
//!
//! ## Features
//! - O(1) insert, remove and contains inside the window
//! - Window grows at either end, negative elements included
//! - Union, intersection, difference and symmetric difference merged in
//!   place, touching only the region each operator needs
//! - Equality and hashing independent of slack words and window offset
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use dense_int_set::DenseSet;
//!
//! let a = DenseSet::from([1, 2, 3, 1_000]);
//! let b = DenseSet::from([2, 3, 4]);
//!
//! assert_eq!((&a & &b).to_vec(), vec![2, 3]);
//! assert_eq!((&a - &b).to_vec(), vec![1, 1_000]);
//! assert!(DenseSet::from([2, 3]).is_subset(&a));
//! ```

#![no_std]

extern crate alloc;

mod bitmap;
mod chunks;
mod constants;
mod error;
mod key;
mod merge;
mod set;

pub use error::{Error, Result};
pub use merge::MergeOp;
pub use set::{DenseSet, Extreme, IntoIter, Iter};

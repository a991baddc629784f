//! Dense integer set structure and public API.

mod algebra;
mod cmp;
mod convert;
mod iter;
#[allow(clippy::module_inception)]
mod set;

pub use iter::{IntoIter, Iter};
pub use set::{DenseSet, Extreme};

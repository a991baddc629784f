//! Set-algebra engine: two-operand elementwise merge over chunk stores.
//!
//! A single in-place primitive, [`matched_merge`], realizes union,
//! intersection, difference and symmetric difference. The operator's
//! absorbing properties decide which regions outside the overlap of the two
//! windows can be skipped, truncated, or have to be grafted from the right
//! operand.

mod matched;
mod op;

pub use matched::matched_merge;
pub use op::MergeOp;

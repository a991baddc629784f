//! Core constants for dense-int-set.

/// Number of membership bits held by one stored word.
pub const WORD_BITS: u32 = 64;

/// Shift turning an element into its block index (`n >> BLOCK_SHIFT`).
///
/// Arithmetic shift, so negative elements land in negative blocks and the
/// split behaves like floor division by 64.
pub const BLOCK_SHIFT: u32 = 6;

/// Mask extracting the bit position of an element within its block.
pub const BIT_MASK: i64 = (WORD_BITS as i64) - 1;

/// Highest bit position inside a word.
pub const LAST_BIT: u32 = WORD_BITS - 1;

/// Smallest block index any `i64` element can map to.
pub const MIN_BLOCK: i64 = i64::MIN >> BLOCK_SHIFT;

/// Largest block index any `i64` element can map to.
pub const MAX_BLOCK: i64 = i64::MAX >> BLOCK_SHIFT;

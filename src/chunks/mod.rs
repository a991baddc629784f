//! Chunk store: a sliding window of 64-bit words anchored at a block offset.
//!
//! Word `i` of a populated store holds the membership bits of block
//! `offset + i`, i.e. the 64 integers `[(offset + i) * 64, (offset + i) * 64 + 63]`.
//! The window grows and shrinks at either end and may carry zero words as
//! slack; only the trimmed window view used for equality and hashing
//! ignores them.

mod grow;
mod search;
mod store;
mod window;

pub use store::ChunkStore;

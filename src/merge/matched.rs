//! The matched merge: in-place elementwise combination of two chunk stores.

use alloc::collections::VecDeque;

use log::{debug, trace};

use crate::chunks::ChunkStore;
use crate::key::span;
use crate::merge::MergeOp;

/// Merge `b` into `a` in place with operator `op`.
///
/// After the call, for every element `n` covered by either window, `a`
/// holds `op(a_bit(n), b_bit(n))`, with bits outside a window read as zero.
///
/// # Algorithm
/// 1. Empty operands short-circuit: an empty `a` stays empty under a
///    left-absorbing op and otherwise becomes a copy of `b`; an empty `b`
///    clears `a` under a right-absorbing op and otherwise leaves it alone.
/// 2. Right-absorbing ops truncate the parts of `a` outside `b`'s window
///    (disjoint windows clear `a` entirely).
/// 3. Ops that are not left-absorbing graft the parts of `b` outside `a`'s
///    window onto `a`, zero-filling any gap between disjoint windows. For
///    those ops `f(0, x) == x`, so grafted words are plain copies.
/// 4. The overlap is combined word by word in place.
///
/// Parts of `a` outside `b` under a non-right-absorbing op are untouched,
/// since `f(x, 0) == x`; parts of `b` outside `a` under a left-absorbing op
/// stay implicit zeros and never allocate.
///
/// # Performance
/// O(overlap) for intersection and difference; O(overlap + grafted words)
/// for union and symmetric difference. Never proportional to the numeric
/// span between disjoint windows except for the zero gap a graft must fill.
pub fn matched_merge(op: MergeOp, a: &mut ChunkStore, b: &ChunkStore) {
    let Some((b_start, b_words)) = b.parts() else {
        if op.right_absorbing() && !a.is_unallocated() {
            debug!("{op:?} with an empty right operand clears the left operand");
            a.clear();
        }
        return;
    };
    let b_end = b_start + b_words.len() as i64;

    let Some((mut a_start, mut a_end)) = a.bounds() else {
        if !op.left_absorbing() {
            trace!("{op:?} into an empty left operand copies {} words", b_words.len());
            *a = b.clone();
        }
        return;
    };

    if op.right_absorbing() {
        if a_end <= b_start || b_end <= a_start {
            debug!("{op:?} over disjoint windows clears the left operand");
            a.clear();
            return;
        }
        if a_start < b_start {
            a.truncate_front(span(a_start, b_start));
            a_start = b_start;
        }
        if a_end > b_end {
            a.truncate_back(span(b_end, a_end));
            a_end = b_end;
        }
    }

    let lo = a_start.max(b_start);
    let hi = a_end.min(b_end);

    if !op.left_absorbing() {
        if b_start < a_start {
            graft_front(a, a_start, b_start, b_words);
        }
        if b_end > a_end {
            graft_back(a, a_end, b_start, b_words);
        }
    }

    if lo >= hi {
        return;
    }
    let Some((offset, words)) = a.parts_mut() else {
        return;
    };
    let a_from = span(*offset, lo);
    let b_from = span(b_start, lo);
    let len = span(lo, hi);

    for (dst, &src) in words
        .range_mut(a_from..a_from + len)
        .zip(b_words.range(b_from..b_from + len))
    {
        *dst = op.apply(*dst, src);
    }
}

/// Copy `b`'s words lying before `a_start` onto the front of `a`.
fn graft_front(a: &mut ChunkStore, a_start: i64, b_start: i64, b_words: &VecDeque<u64>) {
    let b_end = b_start + b_words.len() as i64;
    let copy_end = b_end.min(a_start);
    let copied = span(b_start, copy_end);
    let gap = span(copy_end, a_start);

    trace!("grafting {copied} words and {gap} gap words before block {a_start}");
    a.reserve(copied + gap);
    a.grow_front(gap);
    a.extend_front(b_words.range(..copied).copied());
}

/// Copy `b`'s words lying at or after `a_end` onto the back of `a`.
fn graft_back(a: &mut ChunkStore, a_end: i64, b_start: i64, b_words: &VecDeque<u64>) {
    let copy_start = b_start.max(a_end);
    let gap = span(a_end, copy_start);
    let skipped = span(b_start, copy_start);

    trace!(
        "grafting {} words and {gap} gap words from block {a_end}",
        b_words.len() - skipped
    );
    a.reserve(gap + b_words.len() - skipped);
    a.grow_back(gap);
    a.extend_back(b_words.range(skipped..).copied());
}

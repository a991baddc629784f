//! Growth and truncation at both ends of the word window.

use log::trace;

use crate::chunks::ChunkStore;
use crate::key;

impl ChunkStore {
    /// Grow the window until it covers `block`.
    ///
    /// From `Empty` this anchors the offset at `block` with one zero word.
    /// Otherwise zero words are prepended (shifting the offset down) or
    /// appended as needed.
    ///
    /// # Returns
    /// Index of `block` inside the word run
    ///
    /// # Performance
    /// O(k) amortized, where k is the number of words added
    pub(crate) fn cover(&mut self, block: i64) -> usize {
        let Some((first, end)) = self.bounds() else {
            let mut words = alloc::collections::VecDeque::with_capacity(1);
            words.push_back(0);
            *self = ChunkStore::Populated {
                offset: block,
                words,
            };
            return 0;
        };

        if block < first {
            self.grow_front(key::span(block, first));
            0
        } else {
            if block >= end {
                self.grow_back(key::span(end, block) + 1);
            }
            key::span(first, block)
        }
    }

    /// Prepend `count` zero words, shifting the offset down by `count`.
    ///
    /// No-op on an `Empty` store, which has no offset to extend from.
    pub fn grow_front(&mut self, count: usize) {
        let Some((offset, words)) = self.parts_mut() else {
            return;
        };
        if count == 0 {
            return;
        }

        trace!("growing chunk store front by {count} words at block {offset}");
        words.reserve(count);
        for _ in 0..count {
            words.push_front(0);
        }
        *offset -= count as i64;
    }

    /// Append `count` zero words.
    ///
    /// No-op on an `Empty` store.
    pub fn grow_back(&mut self, count: usize) {
        let Some((offset, words)) = self.parts_mut() else {
            return;
        };
        if count == 0 {
            return;
        }

        trace!(
            "growing chunk store back by {count} words after block {}",
            *offset + words.len() as i64 - 1
        );
        words.resize(words.len() + count, 0);
    }

    /// Prepend the given words, keeping their order, and shift the offset
    /// down by their number.
    ///
    /// No-op on an `Empty` store.
    pub fn extend_front<I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = u64>,
        I::IntoIter: DoubleEndedIterator,
    {
        let Some((offset, words)) = self.parts_mut() else {
            return;
        };

        let mut added = 0i64;
        for word in incoming.into_iter().rev() {
            words.push_front(word);
            added += 1;
        }
        *offset -= added;
    }

    /// Append the given words.
    ///
    /// No-op on an `Empty` store.
    pub fn extend_back<I>(&mut self, incoming: I)
    where
        I: IntoIterator<Item = u64>,
    {
        if let Some((_, words)) = self.parts_mut() {
            words.extend(incoming);
        }
    }

    /// Drop `count` words from the front, shifting the offset up.
    ///
    /// Dropping every word returns the store to `Empty`.
    pub fn truncate_front(&mut self, count: usize) {
        let Some((offset, words)) = self.parts_mut() else {
            return;
        };
        if count == 0 {
            return;
        }
        if count >= words.len() {
            self.clear();
            return;
        }

        trace!("truncating chunk store front by {count} words at block {offset}");
        words.drain(..count);
        *offset += count as i64;
    }

    /// Drop `count` words from the back.
    ///
    /// Dropping every word returns the store to `Empty`.
    pub fn truncate_back(&mut self, count: usize) {
        let Some((_, words)) = self.parts_mut() else {
            return;
        };
        if count == 0 {
            return;
        }
        if count >= words.len() {
            self.clear();
            return;
        }

        trace!("truncating chunk store back by {count} words");
        words.truncate(words.len() - count);
    }

    /// Reserve room for `additional` more words.
    ///
    /// A hint only: an `Empty` store has no buffer yet and ignores it.
    pub fn reserve(&mut self, additional: usize) {
        if let Some((_, words)) = self.parts_mut() {
            words.reserve(additional);
        }
    }
}

//! Set algebra: in-place and copying union, intersection, difference and
//! symmetric difference, plus their element-sequence and variadic forms.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use crate::error::Result;
use crate::key;
use crate::merge::{matched_merge, MergeOp};
use crate::set::DenseSet;

impl DenseSet {
    /// Merge `other` into `self` in place with an arbitrary operator.
    ///
    /// # Performance
    /// Proportional to the overlap of the two windows plus the words the
    /// operator forces `self` to graft; see [`matched_merge`].
    #[inline]
    pub fn merge_with(&mut self, op: MergeOp, other: &DenseSet) {
        matched_merge(op, &mut self.store, &other.store);
    }

    /// Add every element of `other` to `self`.
    pub fn union_with(&mut self, other: &DenseSet) {
        self.merge_with(MergeOp::Or, other);
    }

    /// Keep only the elements of `self` also in `other`.
    ///
    /// Never grows `self`; words outside `other`'s window are dropped.
    pub fn intersection_with(&mut self, other: &DenseSet) {
        self.merge_with(MergeOp::And, other);
    }

    /// Remove every element of `other` from `self`.
    ///
    /// Never grows `self`.
    pub fn difference_with(&mut self, other: &DenseSet) {
        self.merge_with(MergeOp::AndNot, other);
    }

    /// Keep the elements in exactly one of `self` and `other`.
    pub fn symmetric_difference_with(&mut self, other: &DenseSet) {
        self.merge_with(MergeOp::Xor, other);
    }

    /// Elements in either set.
    ///
    /// Copies the operand with more words and grafts the other onto it.
    ///
    /// # Example
    /// ```rust
    /// use dense_int_set::DenseSet;
    ///
    /// let a = DenseSet::from([1, 2]);
    /// let b = DenseSet::from([2, 3]);
    /// assert_eq!(a.union(&b).to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn union(&self, other: &DenseSet) -> DenseSet {
        let (base, graft) = self.larger_first(other);
        let mut out = base.clone();
        out.union_with(graft);
        out
    }

    /// Elements in both sets.
    ///
    /// Copies the operand with fewer words, so the cost is bounded by the
    /// smaller window.
    pub fn intersection(&self, other: &DenseSet) -> DenseSet {
        let (large, small) = self.larger_first(other);
        let mut out = small.clone();
        out.intersection_with(large);
        out
    }

    /// Elements of `self` not in `other`.
    pub fn difference(&self, other: &DenseSet) -> DenseSet {
        let mut out = self.clone();
        out.difference_with(other);
        out
    }

    /// Elements in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &DenseSet) -> DenseSet {
        let (base, graft) = self.larger_first(other);
        let mut out = base.clone();
        out.symmetric_difference_with(graft);
        out
    }

    /// Union of any number of sets, reduced pairwise.
    ///
    /// An empty input yields an empty set.
    pub fn union_all<'a, I>(sets: I) -> DenseSet
    where
        I: IntoIterator<Item = &'a DenseSet>,
    {
        sets.into_iter().fold(DenseSet::new(), |mut acc, set| {
            acc.union_with(set);
            acc
        })
    }

    /// Intersection of any number of sets, reduced pairwise.
    ///
    /// An empty input yields an empty set.
    pub fn intersection_all<'a, I>(sets: I) -> DenseSet
    where
        I: IntoIterator<Item = &'a DenseSet>,
    {
        let mut sets = sets.into_iter();
        let Some(first) = sets.next() else {
            return DenseSet::new();
        };
        sets.fold(first.clone(), |mut acc, set| {
            acc.intersection_with(set);
            acc
        })
    }

    /// Insert every value of a sequence.
    ///
    /// # Returns
    /// `Err(Error::Range)` at the first unrepresentable value; values before
    /// it stay inserted
    pub fn union_with_elements<I, T>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i64>,
    {
        values.into_iter().try_for_each(|value| self.insert(value).map(drop))
    }

    /// Keep only the elements of `self` that occur in a sequence.
    ///
    /// The sequence is collected into a temporary set (unrepresentable values
    /// are skipped, they cannot be members) and merged like a set operand.
    /// Unlike the other element forms, intersection cannot be applied one
    /// insert or remove at a time: what to drop depends on the whole sequence.
    pub fn intersection_with_elements<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i64>,
    {
        let other: DenseSet = values.into_iter().filter_map(key::lookup_element).collect();
        self.intersection_with(&other);
    }

    /// Remove every value of a sequence.
    pub fn difference_with_elements<I, T>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i64>,
    {
        for value in values {
            self.remove(value);
        }
    }

    /// Toggle membership of every value of a sequence.
    ///
    /// Each occurrence toggles once, so a value repeated an even number of
    /// times leaves its membership unchanged.
    ///
    /// # Returns
    /// `Err(Error::Range)` at the first unrepresentable value; toggles before
    /// it stay applied
    pub fn symmetric_difference_with_elements<I, T>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<i64>,
    {
        values.into_iter().try_for_each(|value| self.toggle(value).map(drop))
    }

    /// Order two operands as (more words, fewer words).
    fn larger_first<'a>(&'a self, other: &'a DenseSet) -> (&'a DenseSet, &'a DenseSet) {
        if self.word_count() >= other.word_count() {
            (self, other)
        } else {
            (other, self)
        }
    }
}

macro_rules! impl_set_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $copying:ident, $in_place:ident) => {
        impl $trait<&DenseSet> for &DenseSet {
            type Output = DenseSet;

            fn $method(self, rhs: &DenseSet) -> DenseSet {
                self.$copying(rhs)
            }
        }

        impl $trait<&DenseSet> for DenseSet {
            type Output = DenseSet;

            fn $method(mut self, rhs: &DenseSet) -> DenseSet {
                self.$in_place(rhs);
                self
            }
        }

        impl $assign_trait<&DenseSet> for DenseSet {
            fn $assign_method(&mut self, rhs: &DenseSet) {
                self.$in_place(rhs);
            }
        }
    };
}

impl_set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, union, union_with);
impl_set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, intersection, intersection_with);
impl_set_operator!(Sub, sub, SubAssign, sub_assign, difference, difference_with);
impl_set_operator!(
    BitXor,
    bitxor,
    BitXorAssign,
    bitxor_assign,
    symmetric_difference,
    symmetric_difference_with
);

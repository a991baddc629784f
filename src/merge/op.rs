//! Closed set of merge operators.

/// Two-bit boolean function applied bitwise by the merge engine.
///
/// The absorbing flags are fixed per operator, so the engine never has to
/// probe the function at runtime.
///
/// | op       | f(0,0) | f(0,1) | f(1,0) | f(1,1) | left-absorbing | right-absorbing |
/// |----------|--------|--------|--------|--------|----------------|-----------------|
/// | `Or`     | 0      | 1      | 1      | 1      | no             | no              |
/// | `And`    | 0      | 0      | 0      | 1      | yes            | yes             |
/// | `AndNot` | 0      | 0      | 1      | 0      | yes            | no              |
/// | `Xor`    | 0      | 1      | 1      | 0      | no             | no              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOp {
    /// Union
    Or,
    /// Intersection
    And,
    /// Difference (`a & !b`)
    AndNot,
    /// Symmetric difference
    Xor,
}

impl MergeOp {
    /// Every operator, for exhaustive checks.
    pub const ALL: [MergeOp; 4] = [MergeOp::Or, MergeOp::And, MergeOp::AndNot, MergeOp::Xor];

    /// Apply the operator to 64 bit pairs at once.
    #[inline]
    pub const fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            MergeOp::Or => a | b,
            MergeOp::And => a & b,
            MergeOp::AndNot => a & !b,
            MergeOp::Xor => a ^ b,
        }
    }

    /// Apply the operator to a single bit pair.
    #[inline]
    pub const fn eval(self, a: bool, b: bool) -> bool {
        match self {
            MergeOp::Or => a | b,
            MergeOp::And => a & b,
            MergeOp::AndNot => a & !b,
            MergeOp::Xor => a ^ b,
        }
    }

    /// `f(false, x) == false` for every `x`: where the left operand has no
    /// bits the result has none either, so the left side never needs to grow.
    #[inline]
    pub const fn left_absorbing(self) -> bool {
        matches!(self, MergeOp::And | MergeOp::AndNot)
    }

    /// `f(x, false) == false` for every `x`: left words outside the right
    /// operand's window become zero and can be truncated.
    #[inline]
    pub const fn right_absorbing(self) -> bool {
        matches!(self, MergeOp::And)
    }
}

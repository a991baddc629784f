use thiserror::Error;

/// Errors raised by fallible set operations.
///
/// Everything not listed here is total: membership tests of unrepresentable
/// values answer `false`, removing an absent element is a no-op, and the
/// set-algebra operations never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The value cannot be represented as an `i64` element.
    #[error("value is outside the representable i64 element range")]
    Range,

    /// Strict removal of an element that is not a member.
    #[error("element {0} is not in the set")]
    KeyNotFound(i64),

    /// The operation needs at least one element.
    #[error("operation requires a non-empty set")]
    Empty,
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::Range.to_string(),
            "value is outside the representable i64 element range"
        );
        assert_eq!(Error::KeyNotFound(-7).to_string(), "element -7 is not in the set");
        assert_eq!(Error::Empty.to_string(), "operation requires a non-empty set");
    }
}

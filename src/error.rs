//! Error types for subseq.
//!
//! The subsequence algorithms themselves are total; only operations that
//! accept a caller-imposed bound can fail.

use thiserror::Error;

/// Errors returned by bounded subsequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Enumeration found more distinct optimal subsequences than allowed.
    #[error("more than {limit} optimal subsequences")]
    TooManySolutions {
        /// The configured maximum number of solutions
        limit: usize,
    },
}

/// Result type alias for subseq operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = Error::TooManySolutions { limit: 3 };
        assert_eq!(err.to_string(), "more than 3 optimal subsequences");
    }
}

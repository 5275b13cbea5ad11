//! Error types for [`Array`](crate::Array) operations.
//!
//! Only two conditions are reported: reading an index past the end, and
//! removing from an empty array. Malformed slice/fill bounds are normalized
//! instead (see [`Bounds`](crate::Bounds)).

use thiserror::Error;

/// Error returned by fallible [`Array`](crate::Array) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `get` was called with an index `>= len`.
    #[error("index {index} out of range for array of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// `pop` or `shift` was called on an empty array.
    #[error("cannot {operation} from an empty array")]
    EmptySequence { operation: &'static str },
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }

    pub(crate) fn empty(operation: &'static str) -> Self {
        Error::EmptySequence { operation }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::out_of_range(7, 5).to_string(),
            "index 7 out of range for array of length 5"
        );
        assert_eq!(
            Error::empty("pop").to_string(),
            "cannot pop from an empty array"
        );
    }
}

//! Errors.

use thiserror::Error as ThisError;

/// Errors reported by trees, graphs, and the algorithms over them.
///
/// None of these is fatal to the structure: the operation that failed did not
/// modify anything, and the caller may inspect the error and continue.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// A position argument is outside `0..len`.
    #[error("index {index} is out of range for a structure with {len} nodes")]
    IndexOutOfRange {
        /// The rejected position.
        index: usize,
        /// Number of nodes at the time of the call.
        len: usize,
    },
    /// A required argument is absent or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The request makes no sense for the current structure.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    /// The structure was mutated while a traversal over it was in progress.
    #[error("the structure was modified during traversal")]
    ConcurrentStructuralChange,
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    #[must_use]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::out_of_range(4, 2).to_string(),
            "index 4 is out of range for a structure with 2 nodes"
        );
        assert_eq!(
            Error::InvalidOperation("the root has no siblings").to_string(),
            "invalid operation: the root has no siblings"
        );
    }
}

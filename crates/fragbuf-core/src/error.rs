//! Error types for buffer operations.

use std::error::Error;
use std::fmt;

/// Errors from the bulk-assign helpers on [`GenericBufferMut`](crate::GenericBufferMut).
///
/// A failed assign never performs a partial copy: the destination is left
/// exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The destination is smaller than the source.
    InsufficientCapacity {
        /// Number of elements the source holds.
        required: usize,
        /// Number of elements the destination can hold.
        capacity: usize,
    },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientCapacity { required, capacity } => {
                write!(
                    f,
                    "insufficient capacity: source has {required} elements, destination holds {capacity}"
                )
            }
        }
    }
}

impl Error for AssignError {}

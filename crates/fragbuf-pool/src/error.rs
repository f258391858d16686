//! Pool-specific error types.

use std::error::Error;
use std::fmt;

use fragbuf_core::{AssignError, SlotId};

use crate::config::ConfigError;

/// Errors that can occur during pool operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The pool configuration failed validation.
    Config(ConfigError),
    /// The backing store could not be reserved at construction.
    BackingStoreUnavailable {
        /// Number of elements that were requested.
        elements: usize,
    },
    /// Not enough free chunks to satisfy the request.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Free capacity in elements at the time of the request.
        free: usize,
    },
    /// Every slot id is in use.
    ///
    /// Only a zero-element request on a pool with every chunk owned by a
    /// distinct slot can hit this; any non-zero request that fits leaves
    /// at least one slot id free.
    SlotsExhausted {
        /// Number of slot ids the pool can hand out.
        num_chunks: u16,
    },
    /// A [`SlotHandle`](crate::SlotHandle) whose slot has been freed since
    /// the handle was taken.
    StaleHandle {
        /// The slot the handle refers to.
        slot: SlotId,
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The slot's current generation.
        current_generation: u32,
    },
    /// Copying initial data into a freshly allocated slot failed.
    Assign(AssignError),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::BackingStoreUnavailable { elements } => {
                write!(f, "could not reserve backing store of {elements} elements")
            }
            Self::CapacityExceeded { requested, free } => {
                write!(
                    f,
                    "pool capacity exceeded: requested {requested} elements, {free} free"
                )
            }
            Self::SlotsExhausted { num_chunks } => {
                write!(f, "all {num_chunks} slot ids are in use")
            }
            Self::StaleHandle {
                slot,
                handle_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale handle for slot {slot}: generation {handle_generation}, current {current_generation}"
                )
            }
            Self::Assign(e) => write!(f, "assign: {e}"),
        }
    }
}

impl Error for PoolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Assign(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PoolError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<AssignError> for PoolError {
    fn from(e: AssignError) -> Self {
        Self::Assign(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_is_source() {
        let err = PoolError::from(ConfigError::ZeroChunks);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "config: num_chunks must be at least 1");
    }

    #[test]
    fn capacity_message_names_both_sizes() {
        let err = PoolError::CapacityExceeded {
            requested: 600,
            free: 512,
        };
        assert_eq!(
            err.to_string(),
            "pool capacity exceeded: requested 600 elements, 512 free"
        );
        assert!(err.source().is_none());
    }
}

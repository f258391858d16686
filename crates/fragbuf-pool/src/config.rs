//! Pool configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a [`ChunkPool`](crate::ChunkPool).
///
/// Fixes the geometry of the backing store. Validated at construction;
/// all values are immutable after the pool is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of elements in each chunk.
    ///
    /// For pools of structs this is often 1. For byte buffers it is the
    /// allocation granularity: every slot's size is rounded up to a
    /// multiple of it. Must be at least 1.
    pub chunk_size: usize,

    /// Number of chunks in the backing store.
    ///
    /// Also the upper bound on the number of slots that can be live at
    /// once, since every live slot owns at least one chunk. Must be at
    /// least 1.
    pub num_chunks: u16,
}

impl PoolConfig {
    /// Default chunk size in elements.
    pub const DEFAULT_CHUNK_SIZE: usize = 128;

    /// Default chunk count.
    pub const DEFAULT_NUM_CHUNKS: u16 = 32;

    /// Create a config with the given geometry.
    pub fn new(chunk_size: usize, num_chunks: u16) -> Self {
        Self {
            chunk_size,
            num_chunks,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.num_chunks == 0 {
            return Err(ConfigError::ZeroChunks);
        }
        if self.chunk_size.checked_mul(self.num_chunks as usize).is_none() {
            return Err(ConfigError::StoreOverflow {
                chunk_size: self.chunk_size,
                num_chunks: self.num_chunks,
            });
        }
        Ok(())
    }

    /// Total elements in the backing store.
    ///
    /// Saturates for configs that fail [`validate`](Self::validate).
    pub fn capacity(&self) -> usize {
        self.chunk_size.saturating_mul(self.num_chunks as usize)
    }

    /// Size of the backing store in bytes for element type `T`.
    pub fn store_bytes<T>(&self) -> usize {
        self.capacity().saturating_mul(std::mem::size_of::<T>())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_SIZE, Self::DEFAULT_NUM_CHUNKS)
    }
}

/// Errors detected during [`PoolConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `chunk_size` is zero.
    ZeroChunkSize,
    /// `num_chunks` is zero.
    ZeroChunks,
    /// `chunk_size * num_chunks` does not fit in `usize`.
    StoreOverflow {
        /// The configured chunk size.
        chunk_size: usize,
        /// The configured chunk count.
        num_chunks: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroChunkSize => write!(f, "chunk_size must be at least 1"),
            Self::ZeroChunks => write!(f, "num_chunks must be at least 1"),
            Self::StoreOverflow {
                chunk_size,
                num_chunks,
            } => {
                write!(
                    f,
                    "backing store of {num_chunks} chunks x {chunk_size} elements overflows usize"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_4096_elements() {
        let config = PoolConfig::default();
        assert_eq!(config.capacity(), 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn store_bytes_scales_with_element_size() {
        let config = PoolConfig::new(16, 4);
        assert_eq!(config.store_bytes::<u8>(), 64);
        assert_eq!(config.store_bytes::<u32>(), 256);
    }

    #[test]
    fn zero_chunk_size_rejected() {
        assert_eq!(
            PoolConfig::new(0, 4).validate(),
            Err(ConfigError::ZeroChunkSize)
        );
    }

    #[test]
    fn zero_chunks_rejected() {
        assert_eq!(PoolConfig::new(8, 0).validate(), Err(ConfigError::ZeroChunks));
    }

    #[test]
    fn overflowing_store_rejected() {
        let config = PoolConfig::new(usize::MAX, 2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StoreOverflow { .. })
        ));
        assert_eq!(config.capacity(), usize::MAX);
    }
}

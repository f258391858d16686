//! fragbuf: a fixed-capacity, chunk-granular slot allocator for
//! memory-constrained devices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fragbuf sub-crates. For most users, adding `fragbuf` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fragbuf::prelude::*;
//!
//! // 32 chunks of 128 bytes, reserved once.
//! let mut pool: ChunkPool<u8> = ChunkPool::new(PoolConfig::new(128, 32)).unwrap();
//!
//! let a = pool.allocate(512).unwrap();
//! let b = pool.allocate(256).unwrap();
//! pool.free(a);
//!
//! // Wraps around `b`: four chunks before it, four after.
//! let c = pool.allocate(1024).unwrap();
//! assert_eq!(pool.free_capacity(), 2816);
//!
//! let mut view = pool.buffer_mut(c);
//! for i in 0..view.size() {
//!     *view.at_mut(i).unwrap() = (i % 255) as u8;
//! }
//! let expected = (1000 % 255) as u8;
//! assert_eq!(pool.buffer(c).at(1000), Some(&expected));
//! # let _ = b;
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fragbuf-core` | `SlotId`, buffer traits, `ArrayBuffer`, `OffsetBuffer` |
//! | [`pool`] | `fragbuf-pool` | `ChunkPool`, views, handles, config, stats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`fragbuf-core`).
///
/// Contains the [`types::GenericBuffer`] and [`types::GenericBufferMut`]
/// capability traits and the two adapter wrappers.
pub use fragbuf_core as types;

/// The chunk pool and its views (`fragbuf-pool`).
///
/// Most users only need [`pool::ChunkPool`] and [`pool::PoolConfig`],
/// which are also in the [`prelude`].
pub use fragbuf_pool as pool;

/// Common imports for typical fragbuf usage.
///
/// ```rust
/// use fragbuf::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use fragbuf_core::{ArrayBuffer, GenericBuffer, GenericBufferMut, OffsetBuffer, SlotId};

    // Errors
    pub use fragbuf_core::AssignError;
    pub use fragbuf_pool::{ConfigError, PoolError};

    // Pool
    pub use fragbuf_pool::{ChunkPool, PoolConfig, PoolStats, SlotHandle, SlotView, SlotViewMut};
}

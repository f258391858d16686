//! Fixed-capacity chunk pool with fragmented slot views.
//!
//! One backing store is reserved at construction and split into equal-size
//! chunks. Callers allocate variable-size slots made of whole chunks and
//! read or write them through views that hide where the chunks physically
//! live. Nothing is allocated on the heap after construction.
//!
//! # Architecture
//!
//! ```text
//! ChunkPool<T> (owner)
//! ├── Box<[T]>          backing store, num_chunks * chunk_size elements
//! ├── ChunkMap          physical chunk -> owning SlotId (or free)
//! ├── generations       per-slot-id counter, bumped on free
//! └── views (borrowed)
//!     ├── SlotView      read-only, implements GenericBuffer
//!     └── SlotViewMut   exclusive, implements GenericBufferMut
//! ```
//!
//! # Allocation rules
//!
//! - A request is rounded up to whole chunks.
//! - The new slot takes the lowest unused slot id.
//! - Chunks are claimed from the lowest free physical position upward,
//!   skipping chunks owned by other slots, so a slot may be scattered.
//! - There is no compaction. Fragmentation only ever costs a linear scan
//!   of the chunk map on access.
//!
//! Views borrow the pool, so a slot cannot be freed while a view over it
//! exists. To refer to a slot across mutations use a [`SlotHandle`], which
//! is checked against the slot's generation when resolved.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chunk_map;
pub mod config;
pub mod error;
pub mod handle;
pub mod pool;
pub mod stats;
pub mod view;

// Public re-exports for the primary API surface.
pub use chunk_map::ChunkMap;
pub use config::{ConfigError, PoolConfig};
pub use error::PoolError;
pub use handle::SlotHandle;
pub use pool::ChunkPool;
pub use stats::PoolStats;
pub use view::{SlotView, SlotViewMut};

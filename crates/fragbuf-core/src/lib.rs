//! Core types and traits for the fragbuf chunk pool.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the buffer capability contract shared by every buffer-like type in
//! the workspace, the slot identifier, and the two adapter wrappers
//! that let plain slices and shifted views take part in bulk copies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod id;
pub mod offset;
pub mod traits;

pub use array::ArrayBuffer;
pub use error::AssignError;
pub use id::SlotId;
pub use offset::OffsetBuffer;
pub use traits::{GenericBuffer, GenericBufferMut};

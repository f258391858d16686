//! Detached, generation-stamped slot references.
//!
//! A [`SlotHandle`] names a slot without borrowing the pool. The pool bumps
//! a per-slot generation every time a slot that owned chunks is freed, so a
//! handle taken before the free no longer matches and resolution fails
//! instead of silently reaching whichever allocation reused the slot id.

use std::fmt;

use fragbuf_core::SlotId;

/// A slot id paired with the generation it was observed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    pub(crate) slot: SlotId,
    pub(crate) generation: u32,
}

impl SlotHandle {
    pub(crate) fn new(slot: SlotId, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// The slot this handle refers to.
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Generation of the slot when the handle was taken.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(slot={}, gen={})", self.slot, self.generation)
    }
}

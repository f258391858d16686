//! Strongly-typed slot identifiers.

use std::fmt;

/// Identifies a slot within a chunk pool.
///
/// A slot is the logical owner of zero or more chunks. Ids are dense in
/// `[0, num_chunks)` and the pool always hands out the lowest unused one,
/// so an id freed earlier is handed out again by a later allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u16);

impl SlotId {
    /// The id as an index into per-slot tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for SlotId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

//! Per-chunk ownership table.
//!
//! A [`ChunkMap`] records, for every physical chunk of the backing store,
//! which slot owns it (or that it is free). Every query is a linear scan
//! over the table; chunk counts are small and bounded by `u16`, so the
//! scans never dominate and the table never needs secondary indexes that
//! could drift out of sync with it.

use fragbuf_core::SlotId;

/// Ownership record for every chunk in a pool.
#[derive(Debug)]
pub struct ChunkMap {
    /// `owners[i]` is the slot owning physical chunk `i`, `None` if free.
    owners: Box<[Option<SlotId>]>,
    /// Scratch table for the first-unused-slot search. Sized once at
    /// construction so allocation never touches the heap.
    seen: Box<[bool]>,
}

impl ChunkMap {
    /// Create a map with every chunk free.
    pub fn new(num_chunks: u16) -> Self {
        let len = num_chunks as usize;
        Self {
            owners: vec![None; len].into_boxed_slice(),
            seen: vec![false; len].into_boxed_slice(),
        }
    }

    /// Number of chunks tracked.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether the map tracks no chunks.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Owner of physical chunk `chunk`, `None` if it is free or out of range.
    pub fn owner(&self, chunk: usize) -> Option<SlotId> {
        self.owners.get(chunk).copied().flatten()
    }

    /// Owners of every chunk in physical order.
    pub fn owners(&self) -> &[Option<SlotId>] {
        &self.owners
    }

    /// Bytes held by the owner table and the search scratch.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.owners) + std::mem::size_of_val(&*self.seen)
    }

    /// Number of free chunks.
    pub fn free_chunks(&self) -> usize {
        self.owners.iter().filter(|o| o.is_none()).count()
    }

    /// Number of chunks owned by `slot`.
    pub fn owned_count(&self, slot: SlotId) -> usize {
        self.owners.iter().filter(|&&o| o == Some(slot)).count()
    }

    /// Whether `slot` owns at least one chunk.
    pub fn is_used(&self, slot: SlotId) -> bool {
        self.owners.contains(&Some(slot))
    }

    /// Physical indices of the chunks owned by `slot`, ascending.
    pub fn owned(&self, slot: SlotId) -> impl Iterator<Item = usize> + '_ {
        self.owners
            .iter()
            .enumerate()
            .filter(move |&(_, &o)| o == Some(slot))
            .map(|(i, _)| i)
    }

    /// Physical index of the `n`-th chunk (zero-based) owned by `slot`.
    pub fn nth_owned(&self, slot: SlotId, n: usize) -> Option<usize> {
        self.owned(slot).nth(n)
    }

    /// Lowest slot id that owns no chunk, or `None` if every id is taken.
    pub fn first_unused_slot(&mut self) -> Option<SlotId> {
        self.seen.fill(false);
        for owner in self.owners.iter().flatten() {
            if let Some(seen) = self.seen.get_mut(owner.index()) {
                *seen = true;
            }
        }
        self.seen
            .iter()
            .position(|&s| !s)
            .map(|i| SlotId(i as u16))
    }

    /// Tag up to `count` free chunks with `slot`, lowest physical index
    /// first. Chunks owned by other slots are skipped. Returns the number
    /// of chunks tagged.
    pub fn claim(&mut self, slot: SlotId, count: usize) -> usize {
        let mut tagged = 0;
        for owner in self.owners.iter_mut() {
            if tagged == count {
                break;
            }
            if owner.is_none() {
                *owner = Some(slot);
                tagged += 1;
            }
        }
        tagged
    }

    /// Return every chunk owned by `slot` to the free state. Returns the
    /// number of chunks released.
    pub fn release(&mut self, slot: SlotId) -> usize {
        let mut released = 0;
        for owner in self.owners.iter_mut() {
            if *owner == Some(slot) {
                *owner = None;
                released += 1;
            }
        }
        released
    }

    /// Length of the longest run of physically adjacent free chunks.
    pub fn largest_free_run(&self) -> usize {
        let mut best = 0;
        let mut run = 0;
        for owner in self.owners.iter() {
            if owner.is_none() {
                run += 1;
                best = best.max(run);
            } else {
                run = 0;
            }
        }
        best
    }

    /// Whether the chunks owned by `slot` are physically adjacent.
    ///
    /// A slot owning zero or one chunk is trivially contiguous.
    pub fn is_contiguous(&self, slot: SlotId) -> bool {
        let mut owned = self.owned(slot);
        let Some(mut prev) = owned.next() else {
            return true;
        };
        for next in owned {
            if next != prev + 1 {
                return false;
            }
            prev = next;
        }
        true
    }
}

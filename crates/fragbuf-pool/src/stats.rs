//! Point-in-time occupancy statistics for a pool.

/// Occupancy figures collected by [`ChunkPool::stats()`](crate::ChunkPool::stats).
///
/// All counts are in chunks unless noted. Collecting them walks the chunk
/// map once per slot id, so this is meant for diagnostics and telemetry
/// rather than the allocation hot path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Elements per chunk.
    pub chunk_size: usize,
    /// Total chunks in the backing store.
    pub num_chunks: usize,
    /// Chunks not owned by any slot.
    pub free_chunks: usize,
    /// Chunks owned by some slot.
    pub used_chunks: usize,
    /// Slots owning at least one chunk.
    pub live_slots: usize,
    /// Longest run of physically adjacent free chunks.
    pub largest_free_run: usize,
    /// Live slots whose chunks are not physically adjacent.
    pub fragmented_slots: usize,
}

impl PoolStats {
    /// Free capacity in elements.
    pub fn free_elements(&self) -> usize {
        self.free_chunks * self.chunk_size
    }

    /// Largest request, in elements, that would be satisfied without
    /// fragmenting the new slot.
    pub fn largest_contiguous_elements(&self) -> usize {
        self.largest_free_run * self.chunk_size
    }
}

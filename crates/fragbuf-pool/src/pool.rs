//! The chunk pool: backing store, chunk map and the allocate/free protocol.

use fragbuf_core::{GenericBufferMut, SlotId};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::chunk_map::ChunkMap;
use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::SlotHandle;
use crate::stats::PoolStats;
use crate::view::{SlotView, SlotViewMut};

/// Fixed-capacity allocator handing out variable-size slots made of
/// equal-size chunks.
///
/// The backing store is reserved once in [`ChunkPool::new`] and never
/// grows, shrinks or moves. A slot's chunks are taken from the lowest free
/// physical positions, so after some churn a slot may be scattered across
/// the store; [`SlotView`] and [`SlotViewMut`] hide that and present the
/// slot as one contiguous logical sequence.
///
/// The pool is not `Clone`; it is the sole owner of its store.
///
/// ```
/// use fragbuf_core::{GenericBuffer, GenericBufferMut};
/// use fragbuf_pool::{ChunkPool, PoolConfig};
///
/// let mut pool: ChunkPool<u8> = ChunkPool::new(PoolConfig::new(128, 32)).unwrap();
/// let slot = pool.allocate(300).unwrap();
/// assert_eq!(pool.buffer(slot).size(), 384);
///
/// pool.buffer_mut(slot).assign(b"hello").unwrap();
/// assert_eq!(pool.buffer(slot).at(4), Some(&b'o'));
///
/// pool.free(slot);
/// assert_eq!(pool.free_capacity(), 4096);
/// ```
#[derive(Debug)]
pub struct ChunkPool<T> {
    /// `num_chunks * chunk_size` elements, chunk `i` at `[i * chunk_size, (i + 1) * chunk_size)`.
    store: Box<[T]>,
    map: ChunkMap,
    /// Per-slot-id generation, bumped when a slot that owned chunks is freed.
    generations: Box<[u32]>,
    config: PoolConfig,
}

impl<T: Default> ChunkPool<T> {
    /// Create a pool, reserving the whole backing store up front.
    ///
    /// Every element starts as `T::default()`. Fails if the config is
    /// invalid or the store cannot be reserved; there is no way to run
    /// without it.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        let elements = config.capacity();

        let mut store = Vec::new();
        store
            .try_reserve_exact(elements)
            .map_err(|_| PoolError::BackingStoreUnavailable { elements })?;
        store.resize_with(elements, T::default);

        debug!(
            chunk_size = config.chunk_size,
            num_chunks = config.num_chunks,
            "chunk pool created"
        );

        Ok(Self {
            store: store.into_boxed_slice(),
            map: ChunkMap::new(config.num_chunks),
            generations: vec![0; config.num_chunks as usize].into_boxed_slice(),
            config,
        })
    }
}

impl<T> ChunkPool<T> {
    /// Allocate a slot able to hold at least `requested` elements.
    ///
    /// The slot receives `ceil(requested / chunk_size)` chunks, taken from
    /// the lowest free physical positions, and the lowest slot id not
    /// currently in use. Fails without changing any state if `requested`
    /// exceeds [`free_capacity`](Self::free_capacity).
    ///
    /// A zero-element request claims no chunks: it returns the lowest
    /// unused slot id, whose view has size zero and which stays unused.
    /// On a pool where every chunk belongs to a different slot there is no
    /// such id, and the request fails with [`PoolError::SlotsExhausted`].
    pub fn allocate(&mut self, requested: usize) -> Result<SlotId, PoolError> {
        let free = self.free_capacity();
        if requested > free {
            debug!(requested, free, "allocation rejected: capacity exceeded");
            return Err(PoolError::CapacityExceeded { requested, free });
        }
        let slot = self
            .map
            .first_unused_slot()
            .ok_or(PoolError::SlotsExhausted {
                num_chunks: self.config.num_chunks,
            })?;

        let chunks = requested.div_ceil(self.config.chunk_size);
        let tagged = if chunks == 0 {
            0
        } else {
            self.map.claim(slot, chunks)
        };
        debug_assert_eq!(tagged, chunks, "free capacity was checked above");

        debug!(
            slot = %slot,
            requested,
            chunks = tagged,
            contiguous = self.map.is_contiguous(slot),
            "slot allocated"
        );
        Ok(slot)
    }

    /// Allocate a slot sized for `data` and copy `data` into it.
    ///
    /// If the copy fails the slot is released before returning, so a
    /// failed call never leaks chunks.
    pub fn allocate_with(&mut self, data: &[T]) -> Result<SlotId, PoolError>
    where
        T: Clone,
    {
        let slot = self.allocate(data.len())?;
        if let Err(e) = self.buffer_mut(slot).assign(data) {
            self.free(slot);
            return Err(e.into());
        }
        Ok(slot)
    }

    /// Return every chunk owned by `slot` to the free pool.
    ///
    /// Freeing a slot that owns nothing is a no-op. Element values are
    /// left in place; the next owner of a chunk sees whatever was there.
    pub fn free(&mut self, slot: SlotId) {
        let released = self.map.release(slot);
        if released == 0 {
            return;
        }
        if let Some(generation) = self.generations.get_mut(slot.index()) {
            *generation = generation.wrapping_add(1);
        }
        debug!(slot = %slot, chunks = released, "slot freed");
    }

    /// Free every slot.
    pub fn reset(&mut self) {
        for id in 0..self.config.num_chunks {
            self.free(SlotId(id));
        }
    }

    /// Free capacity in elements: free chunks times chunk size.
    pub fn free_capacity(&self) -> usize {
        self.map.free_chunks() * self.config.chunk_size
    }

    /// Whether `slot` owns at least one chunk.
    pub fn is_slot_used(&self, slot: SlotId) -> bool {
        self.map.is_used(slot)
    }

    /// Usable size of `slot` in elements; zero if it owns nothing.
    pub fn slot_size(&self, slot: SlotId) -> usize {
        self.map.owned_count(slot) * self.config.chunk_size
    }

    /// Read-only view over `slot`.
    ///
    /// The view may be empty if the slot owns nothing; check
    /// [`is_slot_used`](Self::is_slot_used) or the view's size first.
    pub fn buffer(&self, slot: SlotId) -> SlotView<'_, T> {
        SlotView::new(self, slot)
    }

    /// Mutable view over `slot`.
    pub fn buffer_mut(&mut self, slot: SlotId) -> SlotViewMut<'_, T> {
        SlotViewMut::new(self, slot)
    }

    /// A detached handle for `slot`, or `None` if the slot owns nothing.
    pub fn handle(&self, slot: SlotId) -> Option<SlotHandle> {
        if !self.is_slot_used(slot) {
            return None;
        }
        Some(SlotHandle::new(slot, self.generation(slot)))
    }

    /// Whether `handle` still refers to the allocation it was taken from.
    pub fn is_handle_live(&self, handle: SlotHandle) -> bool {
        handle.generation == self.generation(handle.slot) && self.is_slot_used(handle.slot)
    }

    /// Read-only view for a handle, failing if its slot was freed since.
    pub fn resolve(&self, handle: SlotHandle) -> Result<SlotView<'_, T>, PoolError> {
        self.check_handle(handle)?;
        Ok(self.buffer(handle.slot))
    }

    /// Mutable view for a handle, failing if its slot was freed since.
    pub fn resolve_mut(&mut self, handle: SlotHandle) -> Result<SlotViewMut<'_, T>, PoolError> {
        self.check_handle(handle)?;
        Ok(self.buffer_mut(handle.slot))
    }

    /// Elements per chunk.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Chunks in the backing store.
    pub fn num_chunks(&self) -> u16 {
        self.config.num_chunks
    }

    /// Total elements in the backing store.
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// The configuration the pool was built from.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Read-only access to the ownership table.
    pub fn chunk_map(&self) -> &ChunkMap {
        &self.map
    }

    /// Number of slots owning at least one chunk.
    pub fn live_slots(&self) -> usize {
        (0..self.config.num_chunks)
            .filter(|&id| self.map.is_used(SlotId(id)))
            .count()
    }

    /// Physical chunk indices owned by `slot`, ascending.
    pub fn owned_chunks(&self, slot: SlotId) -> SmallVec<[usize; 8]> {
        self.map.owned(slot).collect()
    }

    /// Collect occupancy statistics.
    pub fn stats(&self) -> PoolStats {
        let free_chunks = self.map.free_chunks();
        let mut live_slots = 0;
        let mut fragmented_slots = 0;
        for id in 0..self.config.num_chunks {
            let slot = SlotId(id);
            if self.map.is_used(slot) {
                live_slots += 1;
                if !self.map.is_contiguous(slot) {
                    fragmented_slots += 1;
                }
            }
        }
        PoolStats {
            chunk_size: self.config.chunk_size,
            num_chunks: self.map.len(),
            free_chunks,
            used_chunks: self.map.len() - free_chunks,
            live_slots,
            largest_free_run: self.map.largest_free_run(),
            fragmented_slots,
        }
    }

    /// Memory held by the backing store and bookkeeping tables, in bytes.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.store)
            + self.map.memory_bytes()
            + std::mem::size_of_val(&*self.generations)
    }

    /// Store index of logical element `index` of `slot`.
    ///
    /// Walks the chunk map to the `index / chunk_size`-th chunk owned by
    /// the slot. `None` if the slot owns fewer chunks than that.
    pub(crate) fn element_index(&self, slot: SlotId, index: usize) -> Option<usize> {
        let chunk_size = self.config.chunk_size;
        let chunk = self.map.nth_owned(slot, index / chunk_size)?;
        Some(chunk * chunk_size + index % chunk_size)
    }

    pub(crate) fn element(&self, slot: SlotId, index: usize) -> Option<&T> {
        let i = self.element_index(slot, index)?;
        self.store.get(i)
    }

    pub(crate) fn element_mut(&mut self, slot: SlotId, index: usize) -> Option<&mut T> {
        let i = self.element_index(slot, index)?;
        self.store.get_mut(i)
    }

    /// Call `f(chunk, logical_offset)` for each chunk of `slot`, in
    /// ascending physical order.
    pub(crate) fn for_each_chunk<F>(&self, slot: SlotId, mut f: F)
    where
        F: FnMut(&[T], usize),
    {
        let chunk_size = self.config.chunk_size;
        let mut logical = 0;
        for (chunk, owner) in self.store.chunks(chunk_size).zip(self.map.owners()) {
            if *owner == Some(slot) {
                f(chunk, logical);
                logical += chunk_size;
            }
        }
    }

    /// Mutable counterpart of [`for_each_chunk`](Self::for_each_chunk).
    pub(crate) fn for_each_chunk_mut<F>(&mut self, slot: SlotId, mut f: F)
    where
        F: FnMut(&mut [T], usize),
    {
        let chunk_size = self.config.chunk_size;
        let mut logical = 0;
        for (chunk, owner) in self.store.chunks_mut(chunk_size).zip(self.map.owners()) {
            if *owner == Some(slot) {
                f(chunk, logical);
                logical += chunk_size;
            }
        }
    }

    fn generation(&self, slot: SlotId) -> u32 {
        self.generations.get(slot.index()).copied().unwrap_or(0)
    }

    fn check_handle(&self, handle: SlotHandle) -> Result<(), PoolError> {
        if self.is_handle_live(handle) {
            return Ok(());
        }
        let current_generation = self.generation(handle.slot);
        trace!(handle = %handle, current_generation, "stale handle rejected");
        Err(PoolError::StaleHandle {
            slot: handle.slot,
            handle_generation: handle.generation,
            current_generation,
        })
    }
}

//! Slot views: contiguous logical access over scattered chunks.
//!
//! A view binds a pool borrow to a slot id and translates logical indices
//! `[0, size)` onto the slot's chunks in ascending physical order. Views
//! are cheap to build and meant to be short-lived; the borrow keeps the
//! slot's chunk assignment fixed for as long as the view exists.

use fragbuf_core::{AssignError, GenericBuffer, GenericBufferMut, SlotId};
use smallvec::SmallVec;
use tracing::trace;

use crate::pool::ChunkPool;

/// Read-only view over one slot of a [`ChunkPool`].
///
/// The size is computed once, when the view is built, from the number of
/// chunks the slot owns at that moment. Element access walks the chunk
/// map, so it costs `O(num_chunks)`; use
/// [`for_each_chunk`](SlotView::for_each_chunk) for bulk reads.
#[derive(Debug)]
pub struct SlotView<'a, T> {
    pool: &'a ChunkPool<T>,
    slot: SlotId,
    size: usize,
}

impl<'a, T> SlotView<'a, T> {
    pub(crate) fn new(pool: &'a ChunkPool<T>, slot: SlotId) -> Self {
        let size = pool.slot_size(slot);
        trace!(slot = %slot, size, "view created");
        Self { pool, slot, size }
    }

    /// The slot this view reads.
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Whether the slot currently owns any chunk.
    pub fn is_valid(&self) -> bool {
        self.pool.is_slot_used(self.slot)
    }

    /// Physical chunk indices backing this view, in logical order.
    pub fn chunks(&self) -> SmallVec<[usize; 8]> {
        self.pool.owned_chunks(self.slot)
    }

    /// Call `f(chunk, logical_offset)` once per chunk, in logical order.
    ///
    /// Each `chunk` slice is exactly `chunk_size` elements long and starts
    /// at `logical_offset` in the view's index space.
    pub fn for_each_chunk<F>(&self, f: F)
    where
        F: FnMut(&[T], usize),
    {
        self.pool.for_each_chunk(self.slot, f);
    }

    /// Copy the view's contents into `out`, chunk by chunk.
    ///
    /// Copies `min(self.size(), out.len())` elements and returns that count.
    pub fn copy_to(&self, out: &mut [T]) -> usize
    where
        T: Clone,
    {
        let limit = self.size.min(out.len());
        self.for_each_chunk(|chunk, offset| {
            if offset >= limit {
                return;
            }
            let n = chunk.len().min(limit - offset);
            out[offset..offset + n].clone_from_slice(&chunk[..n]);
        });
        limit
    }
}

impl<T> GenericBuffer<T> for SlotView<'_, T> {
    fn size(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.pool.element(self.slot, index)
    }
}

/// Mutable view over one slot of a [`ChunkPool`].
///
/// Same translation rules as [`SlotView`]. Holds the pool exclusively, so
/// the slot cannot be freed or reassigned while the view is alive.
#[derive(Debug)]
pub struct SlotViewMut<'a, T> {
    pool: &'a mut ChunkPool<T>,
    slot: SlotId,
    size: usize,
}

impl<'a, T> SlotViewMut<'a, T> {
    pub(crate) fn new(pool: &'a mut ChunkPool<T>, slot: SlotId) -> Self {
        let size = pool.slot_size(slot);
        trace!(slot = %slot, size, "mutable view created");
        Self { pool, slot, size }
    }

    /// The slot this view writes.
    pub fn slot(&self) -> SlotId {
        self.slot
    }

    /// Whether the slot currently owns any chunk.
    pub fn is_valid(&self) -> bool {
        self.pool.is_slot_used(self.slot)
    }

    /// Physical chunk indices backing this view, in logical order.
    pub fn chunks(&self) -> SmallVec<[usize; 8]> {
        self.pool.owned_chunks(self.slot)
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> SlotView<'_, T> {
        SlotView {
            pool: &*self.pool,
            slot: self.slot,
            size: self.size,
        }
    }

    /// Call `f(chunk, logical_offset)` once per chunk with mutable access,
    /// in logical order.
    ///
    /// Lets callers fill a slot a chunk at a time without per-element
    /// index translation.
    pub fn write_to<F>(&mut self, f: F)
    where
        F: FnMut(&mut [T], usize),
    {
        self.pool.for_each_chunk_mut(self.slot, f);
    }

    /// Fill every element of the view with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.write_to(|chunk, _| chunk.fill(value.clone()));
    }
}

impl<T> GenericBuffer<T> for SlotViewMut<'_, T> {
    fn size(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        self.pool.element(self.slot, index)
    }
}

impl<T> GenericBufferMut<T> for SlotViewMut<'_, T> {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size {
            return None;
        }
        self.pool.element_mut(self.slot, index)
    }

    fn assign(&mut self, data: &[T]) -> Result<(), AssignError>
    where
        T: Clone,
    {
        if data.len() > self.size {
            return Err(AssignError::InsufficientCapacity {
                required: data.len(),
                capacity: self.size,
            });
        }
        self.write_to(|chunk, offset| {
            if offset >= data.len() {
                return;
            }
            let n = chunk.len().min(data.len() - offset);
            chunk[..n].clone_from_slice(&data[offset..offset + n]);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use fragbuf_core::OffsetBuffer;

    fn pool(chunk_size: usize, num_chunks: u16) -> ChunkPool<u8> {
        ChunkPool::new(PoolConfig::new(chunk_size, num_chunks)).unwrap()
    }

    /// Pool with slot 0 on chunks 0, 1 and 3, wrapped around slot 1 on chunk 2.
    fn fragmented() -> (ChunkPool<u8>, SlotId) {
        let mut p = pool(4, 6);
        let a = p.allocate(8).unwrap();
        let b = p.allocate(4).unwrap();
        assert_eq!(b, SlotId(1));
        p.free(a);
        let c = p.allocate(12).unwrap();
        assert_eq!(p.owned_chunks(c).as_slice(), &[0, 1, 3]);
        (p, c)
    }

    #[test]
    fn view_size_is_owned_chunks_times_chunk_size() {
        let mut p = pool(128, 32);
        let slot = p.allocate(512).unwrap();
        assert_eq!(p.buffer(slot).size(), 512);
        assert_eq!(p.buffer_mut(slot).size(), 512);
    }

    #[test]
    fn view_of_unused_slot_is_empty_and_invalid() {
        let p = pool(8, 4);
        let view = p.buffer(SlotId(2));
        assert_eq!(view.size(), 0);
        assert!(!view.is_valid());
        assert!(view.at(0).is_none());
    }

    #[test]
    fn indices_cross_physical_gaps() {
        let (mut p, slot) = fragmented();
        {
            let mut view = p.buffer_mut(slot);
            for i in 0..view.size() {
                *view.at_mut(i).unwrap() = i as u8;
            }
        }
        let view = p.buffer(slot);
        assert_eq!(view.to_vec(), (0..12).collect::<Vec<u8>>());
        // Logical index 8 is the first element of physical chunk 3.
        assert_eq!(view.chunks().as_slice(), &[0, 1, 3]);
        assert_eq!(*p.buffer(SlotId(1)).at(0).unwrap(), 0);
    }

    #[test]
    fn out_of_range_access_is_none() {
        let (mut p, slot) = fragmented();
        assert!(p.buffer(slot).at(12).is_none());
        assert!(p.buffer_mut(slot).at_mut(usize::MAX).is_none());
    }

    #[test]
    fn out_of_range_writes_do_not_leak_between_views() {
        let mut p = pool(4, 4);
        let a = p.allocate(4).unwrap();
        let b = p.allocate(4).unwrap();
        assert!(p.buffer_mut(a).at_mut(100).is_none());
        assert!(p.buffer(b).to_vec().iter().all(|&v| v == 0));
    }

    #[test]
    fn for_each_chunk_reports_logical_offsets() {
        let (p, slot) = fragmented();
        let mut seen = Vec::new();
        p.buffer(slot)
            .for_each_chunk(|chunk, offset| seen.push((offset, chunk.len())));
        assert_eq!(seen, vec![(0, 4), (4, 4), (8, 4)]);
    }

    #[test]
    fn write_to_fills_chunks_in_logical_order() {
        let (mut p, slot) = fragmented();
        p.buffer_mut(slot).write_to(|chunk, offset| {
            for (i, v) in chunk.iter_mut().enumerate() {
                *v = (offset + i) as u8;
            }
        });
        assert_eq!(p.buffer(slot).to_vec(), (0..12).collect::<Vec<u8>>());
    }

    #[test]
    fn assign_spans_fragmented_chunks() {
        let (mut p, slot) = fragmented();
        let data: Vec<u8> = (100..110).collect();
        p.buffer_mut(slot).assign(&data).unwrap();
        let out = p.buffer(slot).to_vec();
        assert_eq!(&out[..10], data.as_slice());
        assert_eq!(&out[10..], &[0, 0]);
    }

    #[test]
    fn assign_rejects_oversized_data_untouched() {
        let (mut p, slot) = fragmented();
        assert!(p.buffer_mut(slot).assign(&[7; 13]).is_err());
        assert!(p.buffer(slot).to_vec().iter().all(|&v| v == 0));
    }

    #[test]
    fn copy_to_truncates_to_shorter_side() {
        let (mut p, slot) = fragmented();
        p.buffer_mut(slot).fill(9);
        let mut short = [0u8; 6];
        assert_eq!(p.buffer(slot).copy_to(&mut short), 6);
        assert_eq!(short, [9; 6]);
        let mut long = [0u8; 20];
        assert_eq!(p.buffer(slot).copy_to(&mut long), 12);
        assert_eq!(&long[..12], &[9; 12]);
        assert_eq!(&long[12..], &[0; 8]);
    }

    #[test]
    fn view_is_usable_as_dyn_buffer() {
        let mut p = pool(128, 32);
        let slot = p.allocate(512).unwrap();
        let view = p.buffer(slot);
        let generic: &dyn GenericBuffer<u8> = &view;
        assert_eq!(generic.size(), 512);
    }

    #[test]
    fn offset_buffer_over_slot_view() {
        let (mut p, slot) = fragmented();
        let mut view = p.buffer_mut(slot);
        {
            let mut shifted = OffsetBuffer::new(&mut view, 6);
            assert_eq!(shifted.size(), 6);
            shifted.assign(&[1, 2, 3, 4]).unwrap();
        }
        assert_eq!(view.as_view().to_vec()[6..10], [1, 2, 3, 4]);
    }

    #[test]
    fn copy_between_slots_through_assign_buffer() {
        let mut p = pool(4, 8);
        let src = p.allocate_with(&[5, 6, 7]).unwrap();
        let dst = p.allocate(8).unwrap();
        let snapshot = p.buffer(src).to_vec();
        p.buffer_mut(dst).assign_buffer(&snapshot).unwrap();
        assert_eq!(p.buffer(dst).to_vec()[..4], [5, 6, 7, 0]);
    }
}

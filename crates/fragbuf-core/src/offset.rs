//! Shifted view over another buffer.

use crate::traits::{GenericBuffer, GenericBufferMut};

/// A buffer whose index 0 is index `offset` of the wrapped buffer.
///
/// `B` is normally a reference (`&V` or `&mut V`), so the wrapper borrows
/// the underlying buffer rather than copying it and cannot outlive it.
#[derive(Debug)]
pub struct OffsetBuffer<B> {
    inner: B,
    offset: usize,
}

impl<B> OffsetBuffer<B> {
    /// Shift `inner` by `offset` elements.
    pub fn new(inner: B, offset: usize) -> Self {
        Self { inner, offset }
    }

    /// The fixed shift applied to every index.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Give the wrapped buffer back.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<T, B: GenericBuffer<T>> GenericBuffer<T> for OffsetBuffer<B> {
    fn size(&self) -> usize {
        self.inner.size().saturating_sub(self.offset)
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.inner.at(index.checked_add(self.offset)?)
    }
}

impl<T, B: GenericBufferMut<T>> GenericBufferMut<T> for OffsetBuffer<B> {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.at_mut(index.checked_add(self.offset)?)
    }
}

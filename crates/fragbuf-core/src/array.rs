//! Adapter that exposes an externally owned slice as a buffer.

use crate::traits::{GenericBuffer, GenericBufferMut};

/// Wraps caller-owned storage so it can take part in buffer copies.
///
/// The wrapper may hold no storage at all, in which case it reports a
/// size of zero no matter what length was declared. When storage is
/// present the declared length is clamped to the slice length, so a
/// wrapper can describe a prefix of a larger array but never reach past
/// its end.
#[derive(Debug)]
pub struct ArrayBuffer<'a, T> {
    data: Option<&'a mut [T]>,
    len: usize,
}

impl<'a, T> ArrayBuffer<'a, T> {
    /// Wrap optional storage with a declared length.
    pub fn new(data: Option<&'a mut [T]>, len: usize) -> Self {
        Self { data, len }
    }

    /// Wrap a whole slice.
    pub fn from_slice(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data: Some(data),
            len,
        }
    }

    /// A wrapper with no storage behind it.
    pub fn detached(len: usize) -> Self {
        Self { data: None, len }
    }

    /// The length the wrapper was created with, before clamping.
    pub fn declared_len(&self) -> usize {
        self.len
    }

    /// Give the wrapped storage back to the caller.
    pub fn into_inner(self) -> Option<&'a mut [T]> {
        self.data
    }
}

impl<T> GenericBuffer<T> for ArrayBuffer<'_, T> {
    fn size(&self) -> usize {
        match &self.data {
            Some(data) => self.len.min(data.len()),
            None => 0,
        }
    }

    fn at(&self, index: usize) -> Option<&T> {
        if index >= self.size() {
            return None;
        }
        self.data.as_deref()?.get(index)
    }
}

impl<T> GenericBufferMut<T> for ArrayBuffer<'_, T> {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.size() {
            return None;
        }
        self.data.as_deref_mut()?.get_mut(index)
    }
}

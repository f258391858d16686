//! Test utilities and mock types for fragbuf development.
//!
//! Provides a recording mock of [`GenericBufferMut`] and deterministic
//! data fixtures (see [`fixtures`]) shared by unit, integration and
//! benchmark code across the workspace.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;

use fragbuf_core::{GenericBuffer, GenericBufferMut};

pub use fixtures::{byte_pattern, records, Record};

/// Mock buffer backed by a `Vec<T>` that counts element accesses.
///
/// Reads and mutable accesses are tallied separately so tests can check
/// that a failed composite operation touched nothing, or that a bulk path
/// did not fall back to per-element access.
pub struct MockBuffer<T> {
    data: Vec<T>,
    reads: Cell<usize>,
    writes: usize,
}

impl<T: Clone + Default> MockBuffer<T> {
    /// A buffer of `len` default elements.
    pub fn new(len: usize) -> Self {
        Self::from_vec(vec![T::default(); len])
    }
}

impl<T> MockBuffer<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            reads: Cell::new(0),
            writes: 0,
        }
    }

    /// Number of successful `at()` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of successful `at_mut()` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> GenericBuffer<T> for MockBuffer<T> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        let value = self.data.get(index)?;
        self.reads.set(self.reads.get() + 1);
        Some(value)
    }
}

impl<T> GenericBufferMut<T> for MockBuffer<T> {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let value = self.data.get_mut(index)?;
        self.writes += 1;
        Some(value)
    }
}

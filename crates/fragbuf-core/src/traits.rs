//! Buffer capability traits.
//!
//! Every buffer-like type in the workspace (pool slot views, wrapped
//! arrays, offset views) implements [`GenericBuffer`] and, when it can
//! hand out mutable element access, [`GenericBufferMut`]. The composite
//! operations (`assign`, `assign_buffer`, `to_vec`) are default methods
//! built only on the primitive contract, so they behave identically for
//! every implementation.

use crate::error::AssignError;

/// Read access to an indexed sequence of `T`.
pub trait GenericBuffer<T> {
    /// Number of addressable elements.
    fn size(&self) -> usize;

    /// Element at `index`, or `None` if `index >= self.size()`.
    fn at(&self, index: usize) -> Option<&T>;

    /// Whether the buffer addresses no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Clone every addressable element into a `Vec`, in index order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.size()).filter_map(|i| self.at(i)).cloned().collect()
    }
}

/// Mutable access to an indexed sequence of `T`.
pub trait GenericBufferMut<T>: GenericBuffer<T> {
    /// Mutable element at `index`, or `None` if `index >= self.size()`.
    fn at_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Copy `data` into indices `[0, data.len())`.
    ///
    /// Fails without touching the buffer if `data` is longer than
    /// [`size()`](GenericBuffer::size).
    fn assign(&mut self, data: &[T]) -> Result<(), AssignError>
    where
        T: Clone,
    {
        let capacity = self.size();
        if data.len() > capacity {
            return Err(AssignError::InsufficientCapacity {
                required: data.len(),
                capacity,
            });
        }
        for (i, value) in data.iter().enumerate() {
            if let Some(dst) = self.at_mut(i) {
                dst.clone_from(value);
            }
        }
        Ok(())
    }

    /// Copy every element of `src` into indices `[0, src.size())`.
    ///
    /// Fails without touching the buffer if `src` is larger than this one.
    fn assign_buffer(&mut self, src: &dyn GenericBuffer<T>) -> Result<(), AssignError>
    where
        T: Clone,
    {
        let required = src.size();
        let capacity = self.size();
        if required > capacity {
            return Err(AssignError::InsufficientCapacity { required, capacity });
        }
        for i in 0..required {
            if let (Some(value), Some(dst)) = (src.at(i), self.at_mut(i)) {
                dst.clone_from(value);
            }
        }
        Ok(())
    }
}

impl<T> GenericBuffer<T> for [T] {
    fn size(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> GenericBufferMut<T> for [T] {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn assign(&mut self, data: &[T]) -> Result<(), AssignError>
    where
        T: Clone,
    {
        if data.len() > self.len() {
            return Err(AssignError::InsufficientCapacity {
                required: data.len(),
                capacity: self.len(),
            });
        }
        self[..data.len()].clone_from_slice(data);
        Ok(())
    }
}

impl<T> GenericBuffer<T> for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
}

impl<T> GenericBufferMut<T> for Vec<T> {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn assign(&mut self, data: &[T]) -> Result<(), AssignError>
    where
        T: Clone,
    {
        self.as_mut_slice().assign(data)
    }
}

impl<T, B: GenericBuffer<T> + ?Sized> GenericBuffer<T> for &B {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn at(&self, index: usize) -> Option<&T> {
        (**self).at(index)
    }
}

impl<T, B: GenericBuffer<T> + ?Sized> GenericBuffer<T> for &mut B {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn at(&self, index: usize) -> Option<&T> {
        (**self).at(index)
    }
}

impl<T, B: GenericBufferMut<T> + ?Sized> GenericBufferMut<T> for &mut B {
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        (**self).at_mut(index)
    }

    fn assign(&mut self, data: &[T]) -> Result<(), AssignError>
    where
        T: Clone,
    {
        (**self).assign(data)
    }

    fn assign_buffer(&mut self, src: &dyn GenericBuffer<T>) -> Result<(), AssignError>
    where
        T: Clone,
    {
        (**self).assign_buffer(src)
    }
}

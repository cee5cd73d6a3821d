use alloc::vec::Vec;
use core::fmt;

use crate::element::{element_size, Elem};
use crate::error::{DstructsError, InsertError};
use crate::iter::{VectorCursor, VectorIter};
use crate::sequence::Sequence;

pub const DEFAULT_CAPACITY: usize = 10;

/// Next capacity when the vector is full: `2 * capacity + 1`.
fn grown_capacity(capacity: usize) -> Option<usize> {
    capacity.checked_mul(2)?.checked_add(1)
}

/// A growable array of element references.
///
/// Capacity starts at [`DEFAULT_CAPACITY`] and grows to `2 * capacity + 1`
/// whenever an insertion finds the vector full. It never shrinks except
/// through [`Vector::trim`].
pub struct Vector<'a, T> {
    slots: Vec<Elem<'a, T>>,
    capacity: usize,
}

impl<'a, T> Vector<'a, T> {
    /// Creates an empty vector with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::AllocationFailed` if the initial slots cannot
    /// be reserved.
    pub fn new() -> Result<Self, DstructsError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty vector with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::InvalidConfiguration` if `capacity` is 0 and
    /// `DstructsError::AllocationFailed` if the slots cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, DstructsError> {
        if capacity == 0 {
            return Err(DstructsError::InvalidConfiguration {
                parameter: "capacity",
                value: capacity,
            });
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| DstructsError::AllocationFailed {
                requested: capacity,
            })?;

        Ok(Self { slots, capacity })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots available before the next growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        element_size::<T>()
    }

    // Grows before anything moves, so a failed reservation leaves every slot
    // where it was.
    fn ensure_capacity(&mut self) -> Result<(), DstructsError> {
        if self.slots.len() < self.capacity {
            return Ok(());
        }

        let requested = grown_capacity(self.capacity).ok_or(DstructsError::AllocationFailed {
            requested: usize::MAX,
        })?;
        self.slots
            .try_reserve_exact(requested - self.slots.len())
            .map_err(|_| DstructsError::AllocationFailed { requested })?;

        log::debug!("vector capacity grown from {} to {}", self.capacity, requested);
        self.capacity = requested;
        Ok(())
    }

    /// Inserts an element reference at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Fails with `DstructsError::IndexOutOfBounds` if `index > len` and
    /// `DstructsError::AllocationFailed` if growth fails. The vector is left
    /// unchanged and the element is handed back in the [`InsertError`].
    pub fn insert(&mut self, index: usize, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        let elem = elem.into();
        if index > self.slots.len() {
            let error = DstructsError::IndexOutOfBounds {
                index,
                length: self.slots.len(),
            };
            return Err(InsertError::new(error, elem));
        }

        if let Err(error) = self.ensure_capacity() {
            return Err(InsertError::new(error, elem));
        }
        self.slots.insert(index, elem);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails with `DstructsError::AllocationFailed` if growth fails.
    pub fn push_front(&mut self, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        self.insert(0, elem)
    }

    /// # Errors
    ///
    /// Fails with `DstructsError::AllocationFailed` if growth fails.
    pub fn push_back(&mut self, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        self.insert(self.slots.len(), elem)
    }

    /// Removes the element reference at `index`, shifting later elements left.
    ///
    /// Returns `None` if the index is out of bounds. Capacity is kept.
    pub fn remove(&mut self, index: usize) -> Option<Elem<'a, T>> {
        if index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    pub fn pop_front(&mut self) -> Option<Elem<'a, T>> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Option<Elem<'a, T>> {
        self.slots.pop()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|elem| &**elem)
    }

    /// Replaces the element at `index`, returning the previous reference
    /// without releasing it.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, elem: impl Into<Elem<'a, T>>) -> Result<Elem<'a, T>, DstructsError> {
        let length = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(DstructsError::IndexOutOfBounds { index, length })?;
        Ok(core::mem::replace(slot, elem.into()))
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.slots.last().map(|elem| &**elem)
    }

    /// Same as [`Vector::first`].
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.first()
    }

    /// Same as [`Vector::last`].
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.last()
    }

    /// Index of the first element equal to `value`.
    ///
    /// Compares contents, so a distinct but equal value is found.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.slots.iter().position(|elem| **elem == *value)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Calls `f` once per element, front to back.
    pub fn apply<F: FnMut(&T)>(&self, mut f: F) {
        for elem in &self.slots {
            f(&**elem);
        }
    }

    /// Hands every element reference to `release`, front to back, then
    /// empties the vector. Capacity is kept.
    pub fn clear_with<F: FnMut(Elem<'a, T>)>(&mut self, release: F) {
        log::trace!("releasing {} vector elements", self.slots.len());
        self.slots.drain(..).for_each(release);
    }

    /// Releases every owned element and empties the vector. Capacity is kept.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Shrinks the capacity to exactly the current length.
    pub fn trim(&mut self) {
        self.slots.shrink_to_fit();
        log::debug!("vector capacity trimmed from {} to {}", self.capacity, self.slots.len());
        self.capacity = self.slots.len();
    }

    /// Shallow snapshot of the element references, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&T> {
        self.slots.iter().map(|elem| &**elem).collect()
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> VectorIter<'_, 'a, T> {
        VectorIter::new(&self.slots)
    }

    /// Returns an iterator from back to front.
    pub fn iter_rev(&self) -> core::iter::Rev<VectorIter<'_, 'a, T>> {
        self.iter().rev()
    }

    /// Returns a bidirectional cursor sitting just before the element at
    /// `index`. `index == len` places it after the last element.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::IndexOutOfBounds` if `index > len`.
    pub fn cursor(&self, index: usize) -> Result<VectorCursor<'_, 'a, T>, DstructsError> {
        if index > self.slots.len() {
            return Err(DstructsError::IndexOutOfBounds {
                index,
                length: self.slots.len(),
            });
        }
        Ok(VectorCursor::new(self, index))
    }
}

impl<'a, T> Sequence<'a, T> for Vector<'a, T> {
    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn insert(&mut self, index: usize, elem: Elem<'a, T>) -> Result<(), InsertError<'a, T>> {
        Vector::insert(self, index, elem)
    }

    fn remove(&mut self, index: usize) -> Option<Elem<'a, T>> {
        Vector::remove(self, index)
    }

    fn get(&self, index: usize) -> Option<&T> {
        Vector::get(self, index)
    }

    fn set(&mut self, index: usize, elem: Elem<'a, T>) -> Result<Elem<'a, T>, DstructsError> {
        Vector::set(self, index, elem)
    }

    fn apply<F: FnMut(&T)>(&self, f: F) {
        Vector::apply(self, f);
    }

    fn clear_with<F: FnMut(Elem<'a, T>)>(&mut self, release: F) {
        Vector::clear_with(self, release);
    }

    fn to_vec(&self) -> Vec<&T> {
        Vector::to_vec(self)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        Vector::index_of(self, value)
    }
}

impl<'s, 'a, T> IntoIterator for &'s Vector<'a, T> {
    type Item = &'s T;
    type IntoIter = VectorIter<'s, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

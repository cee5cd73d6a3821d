use alloc::vec::Vec;

use crate::element::Elem;
use crate::error::{DstructsError, InsertError};

/// Operations shared by [`Vector`](crate::Vector) and
/// [`LinkedList`](crate::LinkedList).
///
/// Both containers follow the same index conventions: insertion accepts
/// `0..=len`, access and removal accept `0..len`. Anything else is reported
/// without touching the container. Given the same sequence of calls, both
/// produce the same observable results.
pub trait Sequence<'a, T: 'a> {
    fn len(&self) -> usize;

    /// Inserts `elem` at `index`, shifting later elements back by one.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index > len`, `AllocationFailed` if storage
    /// could not grow. The container is unchanged on error and `elem` comes
    /// back inside the [`InsertError`].
    fn insert(&mut self, index: usize, elem: Elem<'a, T>) -> Result<(), InsertError<'a, T>>;

    /// Removes and returns the element reference at `index`.
    fn remove(&mut self, index: usize) -> Option<Elem<'a, T>>;

    fn get(&self, index: usize) -> Option<&T>;

    /// Replaces the element at `index` and returns the previous reference
    /// without releasing it.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if `index >= len`.
    fn set(&mut self, index: usize, elem: Elem<'a, T>) -> Result<Elem<'a, T>, DstructsError>;

    /// Calls `f` once per element, in order.
    fn apply<F: FnMut(&T)>(&self, f: F);

    /// Hands every element to `release` in order and leaves the container
    /// empty.
    fn clear_with<F: FnMut(Elem<'a, T>)>(&mut self, release: F);

    /// Shallow snapshot of the current element references, in order.
    fn to_vec(&self) -> Vec<&T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first(&self) -> Option<&T> {
        self.get(0)
    }

    fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// # Errors
    ///
    /// `AllocationFailed` if storage could not grow.
    fn push_front(&mut self, elem: Elem<'a, T>) -> Result<(), InsertError<'a, T>> {
        self.insert(0, elem)
    }

    /// # Errors
    ///
    /// `AllocationFailed` if storage could not grow.
    fn push_back(&mut self, elem: Elem<'a, T>) -> Result<(), InsertError<'a, T>> {
        self.insert(self.len(), elem)
    }

    fn pop_front(&mut self) -> Option<Elem<'a, T>> {
        self.remove(0)
    }

    fn pop_back(&mut self) -> Option<Elem<'a, T>> {
        let index = self.len().checked_sub(1)?;
        self.remove(index)
    }

    /// Index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut found = None;
        let mut index = 0;
        self.apply(|elem| {
            if found.is_none() && elem == value {
                found = Some(index);
            }
            index += 1;
        });
        found
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Releases every element.
    fn clear(&mut self) {
        self.clear_with(drop);
    }
}

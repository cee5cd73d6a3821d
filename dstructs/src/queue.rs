use alloc::vec::Vec;

use crate::element::Elem;
use crate::error::InsertError;
use crate::iter::ListIter;
use crate::list::LinkedList;

/// FIFO queue: enqueues at the back of a [`LinkedList`], dequeues at the
/// front.
pub struct Queue<'a, T> {
    list: LinkedList<'a, T>,
}

impl<'a, T> Queue<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// True when there is no head element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// # Errors
    ///
    /// Fails with `DstructsError::AllocationFailed` if the node cannot be
    /// stored; the element is handed back in the [`InsertError`].
    pub fn enqueue(&mut self, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        self.list.push_back(elem)
    }

    /// Removes and returns the oldest element reference.
    ///
    /// Returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<Elem<'a, T>> {
        self.list.pop_front()
    }

    /// The element the next `dequeue` would return.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.list.first()
    }

    /// The most recently enqueued element.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.list.last()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<&T> {
        self.list.to_vec()
    }

    /// Iterates from head to tail.
    #[must_use]
    pub fn iter(&self) -> ListIter<'_, 'a, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

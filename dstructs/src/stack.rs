use alloc::vec::Vec;

use crate::element::Elem;
use crate::error::InsertError;
use crate::iter::ListIter;
use crate::list::LinkedList;

/// LIFO stack over the front of a [`LinkedList`].
pub struct Stack<'a, T> {
    list: LinkedList<'a, T>,
}

impl<'a, T> Stack<'a, T> {
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

    /// True when there is no top element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top().is_none()
    }

    /// Pushes an element reference onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Fails with `DstructsError::AllocationFailed` if the node cannot be
    /// stored; the element is handed back in the [`InsertError`].
    pub fn push(&mut self, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        self.list.push_front(elem)
    }

    /// Removes and returns the top element reference.
    ///
    /// Returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<Elem<'a, T>> {
        self.list.pop_front()
    }

    /// The element the next `pop` would return.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.list.first()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Snapshot of the element references, top first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&T> {
        self.list.to_vec()
    }

    /// Iterates from the top of the stack down.
    #[must_use]
    pub fn iter(&self) -> ListIter<'_, 'a, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

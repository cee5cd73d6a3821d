use crate::element::Elem;
use crate::list::LinkedList;
use crate::node_arena::NodeId;
use crate::vector::Vector;

/// Iterator over the elements of a [`Vector`]
///
/// This iterator implements `Clone` and `DoubleEndedIterator`.
pub struct VectorIter<'s, 'a, T> {
    inner: core::slice::Iter<'s, Elem<'a, T>>,
}

impl<'s, 'a, T> VectorIter<'s, 'a, T> {
    pub(crate) fn new(slots: &'s [Elem<'a, T>]) -> Self {
        Self {
            inner: slots.iter(),
        }
    }
}

impl<T> Clone for VectorIter<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'s, T> Iterator for VectorIter<'s, '_, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|elem| &**elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for VectorIter<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|elem| &**elem)
    }
}

impl<T> ExactSizeIterator for VectorIter<'_, '_, T> {}

/// Bidirectional cursor over a [`Vector`].
///
/// The cursor sits between two elements. `next` returns the element after the
/// cursor and steps past it; `prev` returns the element before the cursor and
/// steps back over it. At either boundary the call returns `None` and the
/// cursor stays put, so `next` followed by `prev` yields the same element.
///
/// The cursor borrows the vector, so the vector cannot be modified while the
/// cursor is alive.
pub struct VectorCursor<'s, 'a, T> {
    vector: &'s Vector<'a, T>,
    position: usize,
}

impl<'s, 'a, T> VectorCursor<'s, 'a, T> {
    pub(crate) fn new(vector: &'s Vector<'a, T>, position: usize) -> Self {
        Self { vector, position }
    }

    /// Number of elements before the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.position < self.vector.len()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.position > 0
    }

    /// Returns the element before the cursor and moves the cursor before it.
    pub fn prev(&mut self) -> Option<&'s T> {
        let index = self.position.checked_sub(1)?;
        let elem = self.vector.get(index)?;
        self.position = index;
        Some(elem)
    }
}

impl<T> Clone for VectorCursor<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            vector: self.vector,
            position: self.position,
        }
    }
}

impl<'s, T> Iterator for VectorCursor<'s, '_, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.vector.get(self.position)?;
        self.position += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for VectorCursor<'_, '_, T> {}

/// Iterator over the elements of a [`LinkedList`]
///
/// This iterator implements `Clone` and `DoubleEndedIterator`.
pub struct ListIter<'s, 'a, T> {
    list: &'s LinkedList<'a, T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'s, 'a, T> ListIter<'s, 'a, T> {
    pub(crate) fn new(list: &'s LinkedList<'a, T>) -> Self {
        Self {
            list,
            front: list.head_id(),
            back: list.tail_id(),
            remaining: list.len(),
        }
    }
}

impl<T> Clone for ListIter<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'s, T> Iterator for ListIter<'s, '_, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&*node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for ListIter<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&*node.elem)
    }
}

impl<T> ExactSizeIterator for ListIter<'_, '_, T> {}

/// Bidirectional cursor over a [`LinkedList`].
///
/// Holds the node on each side of the cursor. Every move follows exactly one
/// link; the list is never re-walked from the head. Semantics match
/// [`VectorCursor`].
pub struct ListCursor<'s, 'a, T> {
    list: &'s LinkedList<'a, T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    position: usize,
}

impl<'s, 'a, T> ListCursor<'s, 'a, T> {
    pub(crate) fn new(
        list: &'s LinkedList<'a, T>,
        prev: Option<NodeId>,
        next: Option<NodeId>,
        position: usize,
    ) -> Self {
        Self {
            list,
            prev,
            next,
            position,
        }
    }

    /// Number of elements before the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Returns the element before the cursor and moves the cursor before it.
    pub fn prev(&mut self) -> Option<&'s T> {
        let id = self.prev?;
        let node = self.list.node(id)?;
        self.next = Some(id);
        self.prev = node.prev;
        self.position -= 1;
        Some(&*node.elem)
    }
}

impl<T> Clone for ListCursor<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            prev: self.prev,
            next: self.next,
            position: self.position,
        }
    }
}

impl<'s, T> Iterator for ListCursor<'s, '_, T> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = self.list.node(id)?;
        self.prev = Some(id);
        self.next = node.next;
        self.position += 1;
        Some(&*node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ListCursor<'_, '_, T> {}

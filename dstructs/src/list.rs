use alloc::vec::Vec;
use core::fmt;

use crate::element::{element_size, Elem};
use crate::error::{DstructsError, InsertError};
use crate::iter::{ListCursor, ListIter};
use crate::node_arena::{Node, NodeArena, NodeId};
use crate::sequence::Sequence;

/// A doubly-linked list of element references.
///
/// Head and tail are reached in O(1); indexed access walks from whichever end
/// is nearer. Nodes live in an internal arena and link to each other by id.
pub struct LinkedList<'a, T> {
    nodes: NodeArena<'a, T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<'a, T> LinkedList<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn element_size(&self) -> usize {
        element_size::<T>()
    }

    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn tail_id(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<'a, T>> {
        self.nodes.get(id)
    }

    /// Id of the node at `index`, walking from the nearer end.
    pub(crate) fn node_id_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut id = self.head?;
            for _ in 0..index {
                id = self.nodes.get(id)?.next?;
            }
            Some(id)
        } else {
            let mut id = self.tail?;
            for _ in index + 1..self.len {
                id = self.nodes.get(id)?.prev?;
            }
            Some(id)
        }
    }

    /// Inserts an element reference at `index`, splicing a new node between
    /// its neighbours.
    ///
    /// # Errors
    ///
    /// Fails with `DstructsError::IndexOutOfBounds` if `index > len` and
    /// `DstructsError::AllocationFailed` if the node cannot be stored. The
    /// list is left unchanged and the element is handed back in the
    /// [`InsertError`].
    pub fn insert(&mut self, index: usize, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        let elem = elem.into();
        if index > self.len {
            let error = DstructsError::IndexOutOfBounds {
                index,
                length: self.len,
            };
            return Err(InsertError::new(error, elem));
        }
        if let Err(error) = self.nodes.reserve() {
            return Err(InsertError::new(error, elem));
        }

        let next = if index == self.len {
            None
        } else {
            self.node_id_at(index)
        };
        let prev = match next {
            Some(id) => self.nodes.get(id).and_then(|node| node.prev),
            None => self.tail,
        };

        let id = self.nodes.alloc(Node { elem, prev, next });

        match prev.and_then(|p| self.nodes.get_mut(p)) {
            Some(node) => node.next = Some(id),
            None => self.head = Some(id),
        }
        match next.and_then(|n| self.nodes.get_mut(n)) {
            Some(node) => node.prev = Some(id),
            None => self.tail = Some(id),
        }

        self.len += 1;
        debug_assert_eq!(self.nodes.live(), self.len);
        Ok(())
    }

    /// # Errors
    ///
    /// Fails with `DstructsError::AllocationFailed` if the node cannot be stored.
    pub fn push_front(&mut self, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        self.insert(0, elem)
    }

    /// # Errors
    ///
    /// Fails with `DstructsError::AllocationFailed` if the node cannot be stored.
    pub fn push_back(&mut self, elem: impl Into<Elem<'a, T>>) -> Result<(), InsertError<'a, T>> {
        self.insert(self.len, elem)
    }

    /// Unlinks the node at `index` and returns its element reference.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Elem<'a, T>> {
        let id = self.node_id_at(index)?;
        let node = self.nodes.release(id)?;

        match node.prev.and_then(|p| self.nodes.get_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.nodes.get_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        debug_assert_eq!(self.nodes.live(), self.len);
        Some(node.elem)
    }

    pub fn pop_front(&mut self) -> Option<Elem<'a, T>> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Option<Elem<'a, T>> {
        let index = self.len.checked_sub(1)?;
        self.remove(index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let id = self.node_id_at(index)?;
        self.nodes.get(id).map(|node| &*node.elem)
    }

    /// Replaces the element at `index`, returning the previous reference
    /// without releasing it.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::IndexOutOfBounds` if `index >= len`.
    pub fn set(&mut self, index: usize, elem: impl Into<Elem<'a, T>>) -> Result<Elem<'a, T>, DstructsError> {
        let out_of_bounds = DstructsError::IndexOutOfBounds {
            index,
            length: self.len,
        };
        let id = self.node_id_at(index).ok_or(out_of_bounds.clone())?;
        let node = self.nodes.get_mut(id).ok_or(out_of_bounds)?;
        Ok(core::mem::replace(&mut node.elem, elem.into()))
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.nodes.get(self.head?).map(|node| &*node.elem)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.nodes.get(self.tail?).map(|node| &*node.elem)
    }

    /// Index of the first element equal to `value`, walking from the head.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|elem| elem == value)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Calls `f` once per element, head to tail.
    pub fn apply<F: FnMut(&T)>(&self, f: F) {
        self.iter().for_each(f);
    }

    /// Hands every element reference to `release`, head to tail, then frees
    /// all nodes.
    pub fn clear_with<F: FnMut(Elem<'a, T>)>(&mut self, mut release: F) {
        log::trace!("releasing {} list elements", self.len);
        let mut current = self.head;
        while let Some(id) = current {
            let Some(node) = self.nodes.release(id) else {
                break;
            };
            current = node.next;
            release(node.elem);
        }

        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Releases every owned element and frees all nodes.
    pub fn clear(&mut self) {
        self.clear_with(drop);
    }

    /// Shallow snapshot of the element references, head to tail.
    #[must_use]
    pub fn to_vec(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> ListIter<'_, 'a, T> {
        ListIter::new(self)
    }

    /// Returns an iterator from tail to head.
    pub fn iter_rev(&self) -> core::iter::Rev<ListIter<'_, 'a, T>> {
        self.iter().rev()
    }

    /// Returns a bidirectional cursor sitting just before the element at
    /// `index`. `index == len` places it after the tail.
    ///
    /// The walk to `index` happens once here; cursor moves follow one link.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::IndexOutOfBounds` if `index > len`.
    pub fn cursor(&self, index: usize) -> Result<ListCursor<'_, 'a, T>, DstructsError> {
        if index > self.len {
            return Err(DstructsError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }

        let next = self.node_id_at(index);
        let prev = match next {
            Some(id) => self.nodes.get(id).and_then(|node| node.prev),
            None => self.tail,
        };
        Ok(ListCursor::new(self, prev, next, index))
    }
}

impl<T> Default for LinkedList<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Sequence<'a, T> for LinkedList<'a, T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn insert(&mut self, index: usize, elem: Elem<'a, T>) -> Result<(), InsertError<'a, T>> {
        LinkedList::insert(self, index, elem)
    }

    fn remove(&mut self, index: usize) -> Option<Elem<'a, T>> {
        LinkedList::remove(self, index)
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedList::get(self, index)
    }

    fn set(&mut self, index: usize, elem: Elem<'a, T>) -> Result<Elem<'a, T>, DstructsError> {
        LinkedList::set(self, index, elem)
    }

    fn apply<F: FnMut(&T)>(&self, f: F) {
        LinkedList::apply(self, f);
    }

    fn clear_with<F: FnMut(Elem<'a, T>)>(&mut self, release: F) {
        LinkedList::clear_with(self, release);
    }

    fn to_vec(&self) -> Vec<&T> {
        LinkedList::to_vec(self)
    }

    fn first(&self) -> Option<&T> {
        LinkedList::first(self)
    }

    fn last(&self) -> Option<&T> {
        LinkedList::last(self)
    }
}

impl<'s, 'a, T> IntoIterator for &'s LinkedList<'a, T> {
    type Item = &'s T;
    type IntoIter = ListIter<'s, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use alloc::vec::Vec;

use crate::element::Elem;
use crate::error::DstructsError;

pub(crate) type NodeId = usize;

/// A list node: one element reference plus the ids of its neighbours.
pub(crate) struct Node<'a, T> {
    pub(crate) elem: Elem<'a, T>,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

enum Slot<'a, T> {
    Occupied(Node<'a, T>),
    Vacant { next_free: Option<NodeId> },
}

/// Table of list nodes addressed by id.
///
/// Released slots are chained into a free list and reused by the next
/// allocation, so ids stay stable for the lifetime of a node and a stale id
/// can only ever reach a vacant slot or a newer node, never freed memory.
pub(crate) struct NodeArena<'a, T> {
    slots: Vec<Slot<'a, T>>,
    free_head: Option<NodeId>,
    live: usize,
}

impl<'a, T> NodeArena<'a, T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    fn take_free(&mut self) -> Option<NodeId> {
        let id = self.free_head?;
        match self.slots.get(id) {
            Some(Slot::Vacant { next_free }) => {
                self.free_head = *next_free;
                Some(id)
            }
            _ => None,
        }
    }

    /// Makes sure the next `alloc` has a slot without growing the table.
    ///
    /// # Errors
    ///
    /// Returns `DstructsError::AllocationFailed` if no slot is free and the
    /// table cannot grow. The arena is unchanged in that case.
    pub(crate) fn reserve(&mut self) -> Result<(), DstructsError> {
        if self.free_head.is_some() {
            return Ok(());
        }

        let requested = self.slots.len() + 1;
        self.slots
            .try_reserve(1)
            .map_err(|_| DstructsError::AllocationFailed { requested })
    }

    /// Stores `node` and returns its id. Allocation-free after a successful
    /// `reserve`.
    pub(crate) fn alloc(&mut self, node: Node<'a, T>) -> NodeId {
        if let Some(id) = self.take_free() {
            if let Some(slot) = self.slots.get_mut(id) {
                log::trace!("reusing list node slot {id}");
                *slot = Slot::Occupied(node);
                self.live += 1;
                return id;
            }
        }

        let id = self.slots.len();
        self.slots.push(Slot::Occupied(node));
        self.live += 1;
        id
    }

    /// Vacates the slot at `id` and returns the node it held.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node<'a, T>> {
        let slot = self.slots.get_mut(id)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(slot, vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(id);
                self.live -= 1;
                Some(node)
            }
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<'a, T>> {
        match self.slots.get(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<'a, T>> {
        match self.slots.get_mut(id)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drops every slot, releasing any node still held.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

#![cfg_attr(not(test), no_std)]

//! `dstructs`: a vector, a doubly-linked list, and a stack and queue built on
//! the list, all storing element references rather than copies.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Element References
//!
//! Every container holds [`Elem`] values. An element is either owned (a
//! `Box<T>` the container releases on `clear` or drop) or borrowed (a `&T`
//! the caller keeps). The container moves references around; it never copies
//! the pointee.
//!
//! ```
//! # use dstructs::Vector;
//! let shared = 7u32;
//! let mut vector = Vector::new().unwrap();
//!
//! vector.push_back(Box::new(1u32)).unwrap();   // owned
//! vector.push_back(&shared).unwrap();          // borrowed
//!
//! assert_eq!(vector.get(1), Some(&7));
//! assert!(core::ptr::eq(vector.get(1).unwrap(), &shared));
//!
//! // Removal hands the reference back without releasing it
//! let elem = vector.remove(0).unwrap();
//! assert!(elem.is_owned());
//! assert_eq!(*elem, 1);
//! ```
//!
//! # Shared Contract
//!
//! [`Vector`] and [`LinkedList`] both implement [`Sequence`] and behave the
//! same for the same calls:
//!
//! - insertion accepts indices `0..=len`, access and removal `0..len`;
//! - a rejected call leaves the container unchanged, and a rejected insert
//!   hands its element back in an [`InsertError`];
//! - search compares contents with `PartialEq`, not addresses.
//!
//! ```
//! # use dstructs::{LinkedList, Vector};
//! let mut vector = Vector::new().unwrap();
//! let mut list = LinkedList::new();
//!
//! for (index, value) in [10u32, 20, 30].into_iter().enumerate() {
//!     vector.insert(index, Box::new(value)).unwrap();
//!     list.insert(index, Box::new(value)).unwrap();
//! }
//!
//! assert_eq!(vector.to_vec(), list.to_vec());
//! assert_eq!(vector.index_of(&20), Some(1));
//! assert_eq!(list.index_of(&20), Some(1));
//! assert!(vector.insert(5, Box::new(0)).is_err());
//! assert!(list.remove(3).is_none());
//! ```
//!
//! # Growth
//!
//! A [`Vector`] starts with room for [`DEFAULT_CAPACITY`] references and grows
//! to `2 * capacity + 1` when full. Capacity only shrinks through
//! [`Vector::trim`].
//!
//! # Cursors
//!
//! Both containers hand out bidirectional cursors that sit between elements:
//!
//! ```
//! # use dstructs::LinkedList;
//! let mut list = LinkedList::new();
//! for value in [1u8, 2, 3] {
//!     list.push_back(Box::new(value)).unwrap();
//! }
//!
//! let mut cursor = list.cursor(1).unwrap();
//! assert_eq!(cursor.next(), Some(&2));
//! assert_eq!(cursor.prev(), Some(&2));
//! assert_eq!(cursor.prev(), Some(&1));
//! assert!(!cursor.has_prev());
//! ```
//!
//! A cursor borrows its container, so the container cannot be modified while
//! the cursor is in use.
//!
//! # Stack and Queue
//!
//! ```
//! # use dstructs::{Queue, Stack};
//! let mut stack = Stack::new();
//! stack.push(Box::new('a')).unwrap();
//! stack.push(Box::new('b')).unwrap();
//! assert_eq!(stack.pop().map(|elem| *elem), Some('b'));
//!
//! let mut queue = Queue::new();
//! queue.enqueue(Box::new('a')).unwrap();
//! queue.enqueue(Box::new('b')).unwrap();
//! assert_eq!(queue.dequeue().map(|elem| *elem), Some('a'));
//! assert_eq!(queue.tail(), Some(&'b'));
//! ```
//!
//! # Releasing Elements
//!
//! `clear` and drop release owned elements once each. `clear_with` hands each
//! reference to a caller-supplied function instead:
//!
//! ```
//! # use dstructs::Vector;
//! let mut vector = Vector::new().unwrap();
//! vector.push_back(Box::new(String::from("x"))).unwrap();
//!
//! let mut released = Vec::new();
//! vector.clear_with(|elem| released.extend(elem.into_box()));
//! assert!(vector.is_empty());
//! assert_eq!(*released[0], "x");
//! ```

extern crate alloc;

mod element;
mod error;
mod iter;
mod list;
mod node_arena;
mod queue;
mod sequence;
mod stack;
mod vector;

// Re-export public types and traits
pub use element::{element_size, Elem};
pub use error::{DstructsError, InsertError};
pub use iter::{ListCursor, ListIter, VectorCursor, VectorIter};
pub use list::LinkedList;
pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;
pub use vector::{Vector, DEFAULT_CAPACITY};

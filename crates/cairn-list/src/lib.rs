//! Intrusive linked lists over the Cairn arena.
//!
//! Lists never own or inspect the records they thread together. A
//! record is any arena block; the list is told the word offset of a
//! link field inside it (or reads it from a [`Node`] impl) and only
//! ever touches that word.
//!
//! Two storage strategies are provided for each direction:
//!
//! - [`ChainList`] / [`DoublyChainList`]: a plain value of offsets plus
//!   head and tail. Pushing changes the value, so owners that store it
//!   elsewhere must write it back.
//! - [`IndexedList`] / [`DoublyIndexedList`]: additionally record every
//!   element address in a [`DynamicArray`](cairn_arena::DynamicArray),
//!   giving positional access.
//!
//! A link word of zero means "no neighbour", so no record may live at
//! address zero (the arena reserves it).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod doubly;
pub mod indexed;
pub mod node;

pub use chain::{ChainIter, ChainList};
pub use doubly::{DoublyChainList, DoublyIndexedList, RevIter};
pub use indexed::IndexedList;
pub use node::{alloc_node, DoublyNode, Node};

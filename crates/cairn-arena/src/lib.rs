//! Bump-allocated word arena and growable arrays.
//!
//! Every Cairn container lives inside a single [`Arena`]: a contiguous
//! run of `u64` words with one forward-only cursor. Nothing is freed
//! individually; storage lives exactly as long as the arena value.
//!
//! # Layout
//!
//! ```text
//! Arena (Vec<Word>, cursor = len)
//! ├── word 0: reserved, so a zero link word means "none"
//! ├── DynamicArray: [length, capacity, slot 0, slot 1, ...]
//! ├── StableArray cell: [address of the current DynamicArray header]
//! └── StrRef: [byte length, packed bytes ...]
//! ```
//!
//! # Growth
//!
//! A full [`DynamicArray`] grows in place when its last slot ends at the
//! arena cursor, and relocates otherwise. Relocation moves the header, so
//! [`DynamicArray::push`] takes `&mut self` and rewrites the handle;
//! [`StableArray`] adds one cell of indirection for handles that must be
//! copied around.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod array;
pub mod config;
pub mod stable;
pub mod string;

// Public re-exports for the primary API surface.
pub use arena::{Arena, ArenaStats};
pub use array::{DynamicArray, Growth};
pub use config::ArenaConfig;
pub use stable::StableArray;
pub use string::StrRef;

//! Cairn: arena-backed containers built from word addresses.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Cairn sub-crates. For most users, adding `cairn` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::prelude::*;
//!
//! let mut arena = Arena::new();
//!
//! // A growable array. `push` may move it, so it takes `&mut self`.
//! let mut numbers = DynamicArray::create(&mut arena, 2);
//! for n in [1u64, 2, 3] {
//!     numbers.push(&mut arena, n, 0);
//! }
//! assert_eq!(numbers.to_vec(&arena), vec![1, 2, 3]);
//!
//! // A map with a fixed number of buckets.
//! let map = HashMap::<u64>::create(&mut arena, 5);
//! map.insert(&mut arena, Key(7), 70);
//! assert_eq!(map.get(&arena, Key(7)), Some(70));
//!
//! // A tagged store keyed by interned strings.
//! let names = Interner::create(&mut arena, 16);
//! let store = TaggedStore::create(&mut arena, 8);
//! let width = names.intern(&mut arena, "width").key();
//! store.insert(&mut arena, width, 12.5);
//! assert_eq!(store.get_number(&arena, width), Ok(Some(12.5)));
//! assert!(store.get_string(&arena, width).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`types`] | `cairn-core` | `Addr`, `Key`, `Tag`, `Slot`, `ArenaError` |
//! | [`arena`] | `cairn-arena` | `Arena`, `ArenaConfig`, `DynamicArray`, `StableArray`, `StrRef` |
//! | [`list`] | `cairn-list` | `ChainList`, `DoublyChainList`, indexed variants, `Node` traits |
//! | [`map`] | `cairn-map` | `HashMap`, `TaggedStore`, `Value`, `Interner` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Addresses, keys, tags, the [`types::Slot`] trait, and errors (`cairn-core`).
pub use cairn_core as types;

/// The word arena, growable arrays, and arena strings (`cairn-arena`).
///
/// [`arena::Arena`] owns all storage; [`arena::DynamicArray`] and
/// [`arena::StableArray`] are the growable sequences built on it.
pub use cairn_arena as arena;

/// Intrusive linked lists (`cairn-list`).
///
/// [`list::ChainList`] and [`list::DoublyChainList`] are plain values;
/// [`list::IndexedList`] and [`list::DoublyIndexedList`] add positional
/// access.
pub use cairn_list as list;

/// Fixed-bucket hash map, tagged store, and string interner (`cairn-map`).
pub use cairn_map as map;

/// Common imports for typical Cairn usage.
///
/// ```rust
/// use cairn::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cairn_core::{Addr, ArenaError, Key, Slot, Tag, Word};

    // Arena
    pub use cairn_arena::{Arena, ArenaConfig, DynamicArray, Growth, StableArray, StrRef};

    // Lists
    pub use cairn_list::{
        ChainList, DoublyChainList, DoublyIndexedList, DoublyNode, IndexedList, Node,
    };

    // Maps
    pub use cairn_map::{HashMap, Interner, TaggedStore, Tagged, Value};
}

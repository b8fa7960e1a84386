//! Fixed-bucket hash map and tagged value store over the Cairn arena.
//!
//! # Architecture
//!
//! ```text
//! TaggedStore = HashMap<Tagged>
//! HashMap<V>
//! └── DynamicArray<ChainList> (N buckets, never resized)
//!     └── ChainList → entry records [key, next, value...]
//! Interner = HashMap<StableArray<StrRef>> keyed by content hash
//! ```
//!
//! Keys are [`Key`](cairn_core::Key) integers and select their bucket
//! by `key mod N`; there is no separate hash function. Collisions chain.
//! The bucket count is fixed at creation, so long chains simply get
//! longer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod intern;
pub mod map;
pub mod store;
pub mod value;

pub use intern::Interner;
pub use map::HashMap;
pub use store::TaggedStore;
pub use value::{Tagged, Value};

//! Core types and traits for the Cairn arena containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every container in the workspace: arena
//! addresses, map keys, the [`Slot`] word-encoding trait, value tags,
//! and the error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod addr;
pub mod error;
pub mod slot;
pub mod tag;

pub use addr::{Addr, Key, Word};
pub use error::ArenaError;
pub use slot::Slot;
pub use tag::Tag;

//! Test fixtures and reference models for Cairn development.
//!
//! Provides record layouts implementing the list [`Node`](cairn_list::Node) traits, arena
//! constructors pinned to one growth strategy, and [`ModelMap`], a
//! host-side model of the arena hash map's insertion semantics for
//! differential tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use indexmap::IndexMap;

use cairn_arena::{Arena, ArenaConfig};

pub use fixtures::{Item, Twin};

/// An arena whose full arrays always grow in place when they can.
pub fn extending_arena() -> Arena {
    Arena::with_config(ArenaConfig::new(256).with_grow_in_place(true))
}

/// An arena whose full arrays always relocate.
pub fn relocating_arena() -> Arena {
    Arena::with_config(ArenaConfig::new(256).with_grow_in_place(false))
}

/// Both growth strategies, for tests that must hold on either path.
pub fn both_arenas() -> [Arena; 2] {
    [extending_arena(), relocating_arena()]
}

/// Reference model of `HashMap` insertion semantics.
///
/// Each key maps to its records in insertion order. The first record is
/// the live one; later records come only from unchecked inserts and are
/// shadowed, exactly as in a bucket chain.
#[derive(Debug, Default)]
pub struct ModelMap {
    records: IndexMap<u64, Vec<u64>>,
}

impl ModelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checked insert: overwrite the live record or add one.
    pub fn insert(&mut self, key: u64, value: u64) -> Option<u64> {
        match self.records.get_mut(&key) {
            Some(values) => Some(std::mem::replace(&mut values[0], value)),
            None => {
                self.records.insert(key, vec![value]);
                None
            }
        }
    }

    /// Unchecked insert: always add a record.
    pub fn insert_unchecked(&mut self, key: u64, value: u64) {
        self.records.entry(key).or_default().push(value);
    }

    pub fn update(&mut self, key: u64, value: u64) -> bool {
        match self.records.get_mut(&key) {
            Some(values) => {
                values[0] = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: u64) -> Option<u64> {
        self.records.get(&key).map(|values| values[0])
    }

    /// Total records, shadowed ones included.
    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.keys().copied()
    }
}

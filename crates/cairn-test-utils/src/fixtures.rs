//! Reusable record layouts for list tests.
//!
//! - [`Item`]: `[value, next]`, a minimal singly linked record.
//! - [`Twin`]: `[tag, prev, value, next]`, a doubly linked record whose
//!   links are not at the front, to catch offset mix-ups.

use cairn_arena::Arena;
use cairn_core::Addr;
use cairn_list::{alloc_node, DoublyNode, Node};

/// `[value, next]`
pub struct Item;

impl Node for Item {
    const WORDS: usize = 2;
    const NEXT: usize = 1;
}

impl Item {
    pub const VALUE: usize = 0;

    /// Allocate an item holding `value`.
    pub fn alloc(arena: &mut Arena, value: u64) -> Addr {
        let addr = alloc_node::<Item>(arena);
        arena.write(addr, Self::VALUE, value);
        addr
    }

    pub fn value(arena: &Arena, addr: Addr) -> u64 {
        arena.read(addr, Self::VALUE)
    }
}

/// `[tag, prev, value, next]`
pub struct Twin;

impl Node for Twin {
    const WORDS: usize = 4;
    const NEXT: usize = 3;
}

impl DoublyNode for Twin {
    const PREV: usize = 1;
}

impl Twin {
    pub const TAG: usize = 0;
    pub const VALUE: usize = 2;

    /// Allocate a twin holding `value`, with a marker in the tag word.
    pub fn alloc(arena: &mut Arena, value: u64) -> Addr {
        let addr = alloc_node::<Twin>(arena);
        arena.write(addr, Self::TAG, 0x7417);
        arena.write(addr, Self::VALUE, value);
        addr
    }

    pub fn value(arena: &Arena, addr: Addr) -> u64 {
        arena.read(addr, Self::VALUE)
    }

    /// Whether the tag word still holds the marker written at allocation.
    pub fn intact(arena: &Arena, addr: Addr) -> bool {
        arena.read(addr, Self::TAG) == 0x7417
    }
}

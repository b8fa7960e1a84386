//! Record link-field descriptions.

use cairn_arena::Arena;
use cairn_core::Addr;

/// A record type that can be threaded onto a singly linked list.
///
/// Describes the record's layout in words rather than a Rust struct:
/// records live in the arena, and the list only needs to know where the
/// forward link is.
///
/// ```
/// use cairn_list::Node;
///
/// /// [value, next]
/// struct Cell;
///
/// impl Node for Cell {
///     const WORDS: usize = 2;
///     const NEXT: usize = 1;
/// }
/// ```
pub trait Node {
    /// Size of one record in words.
    const WORDS: usize;
    /// Word offset of the forward link. Must be less than `WORDS`.
    const NEXT: usize;
}

/// A record type with both a forward and a backward link.
pub trait DoublyNode: Node {
    /// Word offset of the backward link. Must differ from `NEXT`.
    const PREV: usize;
}

/// Allocate one zeroed record of type `N`.
///
/// Both link fields of a fresh record read as "none".
pub fn alloc_node<N: Node>(arena: &mut Arena) -> Addr {
    arena.alloc(N::WORDS)
}

pub(crate) fn read_link(arena: &Arena, elem: Addr, offset: usize) -> Option<Addr> {
    arena.load::<Option<Addr>>(elem, offset)
}

pub(crate) fn write_link(arena: &mut Arena, elem: Addr, offset: usize, target: Addr) {
    arena.store(elem, offset, &Some(target));
}

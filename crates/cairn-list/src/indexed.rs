//! Linked lists that also index their elements by position.

use cairn_arena::{Arena, DynamicArray, Growth};
use cairn_core::{Addr, ArenaError};

use crate::chain::ChainIter;
use crate::node::{read_link, write_link, Node};

/// A singly linked list backed by an array of element addresses.
///
/// Every pushed element is recorded in order, linked or not, so
/// elements can be reached by index as well as by walking links.
#[derive(Debug)]
pub struct IndexedList {
    items: DynamicArray<Option<Addr>>,
    link: usize,
}

impl IndexedList {
    /// An empty list with room for `capacity` elements before growing.
    pub fn create(arena: &mut Arena, link: usize, capacity: usize) -> Self {
        Self {
            items: DynamicArray::create(arena, capacity),
            link,
        }
    }

    /// An empty list of `N` records.
    pub fn for_node<N: Node>(arena: &mut Arena, capacity: usize) -> Self {
        Self::create(arena, N::NEXT, capacity)
    }

    /// Word offset of the forward link.
    pub fn link_offset(&self) -> usize {
        self.link
    }

    /// Number of registered elements.
    pub fn len(&self, arena: &Arena) -> usize {
        self.items.len(arena)
    }

    /// Whether no element has been registered.
    pub fn is_empty(&self, arena: &Arena) -> bool {
        self.items.is_empty(arena)
    }

    /// The backing address array.
    pub fn items(&self) -> &DynamicArray<Option<Addr>> {
        &self.items
    }

    /// First registered element.
    pub fn head(&self, arena: &Arena) -> Option<Addr> {
        if self.items.is_empty(arena) {
            return None;
        }
        self.items.get_unchecked(arena, 0)
    }

    /// Last registered element.
    pub fn tail(&self, arena: &Arena) -> Option<Addr> {
        let len = self.items.len(arena);
        if len == 0 {
            return None;
        }
        self.items.get_unchecked(arena, len - 1)
    }

    /// Element at position `index`.
    ///
    /// Checked against the backing array's capacity, so reserved
    /// positions past the length read as `Ok(None)`.
    pub fn get(&self, arena: &Arena, index: usize) -> Result<Option<Addr>, ArenaError> {
        self.items.get(arena, index)
    }

    /// Append `elem` and link the previous tail to it.
    pub fn push_and_link(&mut self, arena: &mut Arena, elem: Addr) -> Growth {
        if let Some(tail) = self.tail(arena) {
            write_link(arena, tail, self.link, elem);
        }
        self.items.push(arena, Some(elem), 0)
    }

    /// Append `elem` without linking it to the previous tail.
    pub fn push_no_link(&mut self, arena: &mut Arena, elem: Addr) -> Growth {
        self.items.push(arena, Some(elem), 0)
    }

    /// The element after `elem`, read from its link word.
    pub fn next(&self, arena: &Arena, elem: Addr) -> Option<Addr> {
        read_link(arena, elem, self.link)
    }

    /// Walk forward along links from the head.
    pub fn iter<'a>(&self, arena: &'a Arena) -> ChainIter<'a> {
        ChainIter::new(arena, self.link, self.head(arena))
    }

    /// Registered elements in push order, linked or not.
    pub fn positions<'a>(&'a self, arena: &'a Arena) -> impl Iterator<Item = Addr> + 'a {
        self.items.iter(arena).flatten()
    }
}

//! Doubly linked chains of arena records.

use cairn_arena::{Arena, DynamicArray, Growth};
use cairn_core::{Addr, ArenaError, Slot, Word};

use crate::chain::ChainIter;
use crate::node::{read_link, write_link, DoublyNode};

/// A doubly linked list held entirely in a small value.
///
/// Like [`ChainList`](crate::ChainList) but with a second link word per
/// record pointing back at the predecessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoublyChainList {
    back: usize,
    forward: usize,
    head: Option<Addr>,
    tail: Option<Addr>,
}

impl DoublyChainList {
    /// An empty list with the backward link at word offset `back` and
    /// the forward link at `forward`.
    pub fn new(back: usize, forward: usize) -> Self {
        debug_assert_ne!(back, forward, "link fields must not overlap");
        Self {
            back,
            forward,
            head: None,
            tail: None,
        }
    }

    /// An empty list of `N` records.
    pub fn for_node<N: DoublyNode>() -> Self {
        Self::new(N::PREV, N::NEXT)
    }

    /// Word offsets of the `(back, forward)` links.
    pub fn link_offsets(&self) -> (usize, usize) {
        (self.back, self.forward)
    }

    /// First element, if any.
    pub fn head(&self) -> Option<Addr> {
        self.head
    }

    /// Last element, if any.
    pub fn tail(&self) -> Option<Addr> {
        self.tail
    }

    /// Whether no element has been pushed.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append `elem`: the old tail's forward link points at `elem` and
    /// `elem`'s backward link points at the old tail.
    pub fn push_and_link(&mut self, arena: &mut Arena, elem: Addr) {
        match self.tail {
            None => self.head = Some(elem),
            Some(tail) => {
                write_link(arena, tail, self.forward, elem);
                write_link(arena, elem, self.back, tail);
            }
        }
        self.tail = Some(elem);
    }

    /// Make `elem` the tail without writing any link.
    pub fn push_no_link(&mut self, elem: Addr) {
        if self.head.is_none() {
            self.head = Some(elem);
        }
        self.tail = Some(elem);
    }

    /// The element after `elem`.
    pub fn next(&self, arena: &Arena, elem: Addr) -> Option<Addr> {
        read_link(arena, elem, self.forward)
    }

    /// The element before `elem`.
    pub fn previous(&self, arena: &Arena, elem: Addr) -> Option<Addr> {
        read_link(arena, elem, self.back)
    }

    /// Walk forward from the head.
    pub fn iter<'a>(&self, arena: &'a Arena) -> ChainIter<'a> {
        ChainIter::new(arena, self.forward, self.head)
    }

    /// Walk backward from the tail.
    pub fn iter_rev<'a>(&self, arena: &'a Arena) -> RevIter<'a> {
        RevIter(ChainIter::new(arena, self.back, self.tail))
    }
}

/// Stored as four words: `[back, forward, head, tail]`.
impl Slot for DoublyChainList {
    const WORDS: usize = 4;

    fn store(&self, out: &mut [Word]) {
        out[0] = self.back as Word;
        out[1] = self.forward as Word;
        self.head.store(&mut out[2..3]);
        self.tail.store(&mut out[3..4]);
    }

    fn load(words: &[Word]) -> Self {
        Self {
            back: words[0] as usize,
            forward: words[1] as usize,
            head: Addr::from_word(words[2]),
            tail: Addr::from_word(words[3]),
        }
    }
}

/// Backward iterator over doubly linked records.
pub struct RevIter<'a>(ChainIter<'a>);

impl Iterator for RevIter<'_> {
    type Item = Addr;

    fn next(&mut self) -> Option<Addr> {
        self.0.next()
    }
}

/// A doubly linked list backed by an array of element addresses.
#[derive(Debug)]
pub struct DoublyIndexedList {
    items: DynamicArray<Option<Addr>>,
    back: usize,
    forward: usize,
}

impl DoublyIndexedList {
    /// An empty list with room for `capacity` elements before growing.
    pub fn create(arena: &mut Arena, back: usize, forward: usize, capacity: usize) -> Self {
        debug_assert_ne!(back, forward, "link fields must not overlap");
        Self {
            items: DynamicArray::create(arena, capacity),
            back,
            forward,
        }
    }

    /// An empty list of `N` records.
    pub fn for_node<N: DoublyNode>(arena: &mut Arena, capacity: usize) -> Self {
        Self::create(arena, N::PREV, N::NEXT, capacity)
    }

    /// Number of registered elements.
    pub fn len(&self, arena: &Arena) -> usize {
        self.items.len(arena)
    }

    /// Whether no element has been registered.
    pub fn is_empty(&self, arena: &Arena) -> bool {
        self.items.is_empty(arena)
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

    /// Element at position `index`, checked against the capacity.
    pub fn get(&self, arena: &Arena, index: usize) -> Result<Option<Addr>, ArenaError> {
        self.items.get(arena, index)
    }

    /// Append `elem`, linking it both ways with the previous tail.
    pub fn push_and_link(&mut self, arena: &mut Arena, elem: Addr) -> Growth {
        if let Some(tail) = self.tail(arena) {
            write_link(arena, tail, self.forward, elem);
            write_link(arena, elem, self.back, tail);
        }
        self.items.push(arena, Some(elem), 0)
    }

    /// Append `elem` without linking it.
    pub fn push_no_link(&mut self, arena: &mut Arena, elem: Addr) -> Growth {
        self.items.push(arena, Some(elem), 0)
    }

    /// The element after `elem`.
    pub fn next(&self, arena: &Arena, elem: Addr) -> Option<Addr> {
        read_link(arena, elem, self.forward)
    }

    /// The element before `elem`.
    pub fn previous(&self, arena: &Arena, elem: Addr) -> Option<Addr> {
        read_link(arena, elem, self.back)
    }

    /// Walk forward from the head.
    pub fn iter<'a>(&self, arena: &'a Arena) -> ChainIter<'a> {
        ChainIter::new(arena, self.forward, self.head(arena))
    }

    /// Walk backward from the tail.
    pub fn iter_rev<'a>(&self, arena: &'a Arena) -> RevIter<'a> {
        RevIter(ChainIter::new(arena, self.back, self.tail(arena)))
    }
}

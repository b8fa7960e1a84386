//! Singly linked chains of arena records.

use cairn_arena::Arena;
use cairn_core::{Addr, Slot, Word};

use crate::node::{read_link, write_link, Node};

/// A singly linked list held entirely in a small value.
///
/// The list is `{link, head, tail}`: the word offset of the forward
/// link inside each record, and the first and last element. It owns no
/// storage of its own. Pushing rewrites `tail` (and `head` when empty),
/// so a copy stored elsewhere, such as a hash map bucket, goes stale
/// until the owner stores the updated value back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainList {
    link: usize,
    head: Option<Addr>,
    tail: Option<Addr>,
}

impl ChainList {
    /// An empty list whose records keep their forward link at word
    /// offset `link`.
    pub fn new(link: usize) -> Self {
        Self {
            link,
            head: None,
            tail: None,
        }
    }

    /// An empty list of `N` records.
    pub fn for_node<N: Node>() -> Self {
        Self::new(N::NEXT)
    }

    /// Word offset of the forward link.
    pub fn link_offset(&self) -> usize {
        self.link
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

    /// Append `elem`, linking the current tail to it.
    ///
    /// Writes only the tail's link word. `elem`'s own link is left as
    /// is; a freshly allocated record reads as "no next".
    pub fn push_and_link(&mut self, arena: &mut Arena, elem: Addr) {
        match self.tail {
            None => self.head = Some(elem),
            Some(tail) => write_link(arena, tail, self.link, elem),
        }
        self.tail = Some(elem);
    }

    /// Make `elem` the tail without writing any link.
    ///
    /// Seeds an empty list explicitly, or appends an element that is
    /// deliberately not reachable from its predecessor.
    pub fn push_no_link(&mut self, elem: Addr) {
        if self.head.is_none() {
            self.head = Some(elem);
        }
        self.tail = Some(elem);
    }

    /// The element after `elem`, read from its link word.
    pub fn next(&self, arena: &Arena, elem: Addr) -> Option<Addr> {
        read_link(arena, elem, self.link)
    }

    /// Walk forward from the head.
    ///
    /// The walk follows link words, so it never terminates on a cyclic
    /// chain (an element pushed twice).
    pub fn iter<'a>(&self, arena: &'a Arena) -> ChainIter<'a> {
        ChainIter::new(arena, self.link, self.head)
    }
}

/// Stored as three words: `[link, head, tail]`.
impl Slot for ChainList {
    const WORDS: usize = 3;

    fn store(&self, out: &mut [Word]) {
        out[0] = self.link as Word;
        self.head.store(&mut out[1..2]);
        self.tail.store(&mut out[2..3]);
    }

    fn load(words: &[Word]) -> Self {
        Self {
            link: words[0] as usize,
            head: Addr::from_word(words[1]),
            tail: Addr::from_word(words[2]),
        }
    }
}

/// Forward iterator over linked records.
pub struct ChainIter<'a> {
    arena: &'a Arena,
    link: usize,
    cursor: Option<Addr>,
}

impl<'a> ChainIter<'a> {
    pub(crate) fn new(arena: &'a Arena, link: usize, start: Option<Addr>) -> Self {
        Self {
            arena,
            link,
            cursor: start,
        }
    }
}

impl Iterator for ChainIter<'_> {
    type Item = Addr;

    fn next(&mut self) -> Option<Addr> {
        let current = self.cursor?;
        self.cursor = read_link(self.arena, current, self.link);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::alloc_node;

    /// `[value, next]`
    struct Cell;

    impl Node for Cell {
        const WORDS: usize = 2;
        const NEXT: usize = 1;
    }

    fn cell(arena: &mut Arena, value: u64) -> Addr {
        let addr = alloc_node::<Cell>(arena);
        arena.write(addr, 0, value);
        addr
    }

    fn values(list: &ChainList, arena: &Arena) -> Vec<u64> {
        list.iter(arena).map(|a| arena.read(a, 0)).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list = ChainList::new(3);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.link_offset(), 3);
    }

    #[test]
    fn first_push_sets_head_and_tail() {
        let mut arena = Arena::new();
        let mut list = ChainList::for_node::<Cell>();
        let a = cell(&mut arena, 1);
        list.push_and_link(&mut arena, a);
        assert_eq!(list.head(), Some(a));
        assert_eq!(list.tail(), Some(a));
        assert_eq!(list.next(&arena, a), None);
    }

    #[test]
    fn forward_walk_visits_in_push_order() {
        let mut arena = Arena::new();
        let mut list = ChainList::for_node::<Cell>();
        for v in [5, 6, 7, 8] {
            let c = cell(&mut arena, v);
            list.push_and_link(&mut arena, c);
        }
        assert_eq!(values(&list, &arena), vec![5, 6, 7, 8]);
    }

    #[test]
    fn push_only_writes_the_link_word() {
        let mut arena = Arena::new();
        let mut list = ChainList::for_node::<Cell>();
        let a = cell(&mut arena, 11);
        let b = cell(&mut arena, 22);
        list.push_and_link(&mut arena, a);
        list.push_and_link(&mut arena, b);
        assert_eq!(arena.read(a, 0), 11);
        assert_eq!(arena.read(a, 1), b.to_word());
        assert_eq!(arena.read(b, 1), 0);
    }

    #[test]
    fn push_no_link_seeds_without_linking() {
        let mut arena = Arena::new();
        let mut list = ChainList::for_node::<Cell>();
        let a = cell(&mut arena, 1);
        let b = cell(&mut arena, 2);
        list.push_no_link(a);
        assert_eq!(list.head(), Some(a));
        list.push_no_link(b);
        assert_eq!(list.head(), Some(a));
        assert_eq!(list.tail(), Some(b));
        // b was never linked from a.
        assert_eq!(values(&list, &arena), vec![1]);
    }

    #[test]
    fn seeded_list_links_later_pushes() {
        let mut arena = Arena::new();
        let mut list = ChainList::for_node::<Cell>();
        let a = cell(&mut arena, 1);
        let b = cell(&mut arena, 2);
        list.push_no_link(a);
        list.push_and_link(&mut arena, b);
        assert_eq!(values(&list, &arena), vec![1, 2]);
    }

    #[test]
    fn stale_copy_does_not_see_later_pushes() {
        let mut arena = Arena::new();
        let mut list = ChainList::for_node::<Cell>();
        let a = cell(&mut arena, 1);
        list.push_and_link(&mut arena, a);
        let snapshot = list;
        let b = cell(&mut arena, 2);
        list.push_and_link(&mut arena, b);
        assert_eq!(snapshot.tail(), Some(a));
        assert_eq!(list.tail(), Some(b));
    }

    #[test]
    fn slot_encoding_round_trip() {
        let mut arena = Arena::new();
        let mut list = ChainList::new(4);
        let a = arena.alloc(5);
        let b = arena.alloc(5);
        list.push_no_link(a);
        list.push_no_link(b);
        let addr = arena.alloc_slot(&list);
        assert_eq!(arena.load::<ChainList>(addr, 0), list);
        let blank = arena.alloc(3);
        assert_eq!(arena.load::<ChainList>(blank, 0), ChainList::new(0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn walk_matches_push_order(
                vals in proptest::collection::vec(any::<u64>(), 0..50),
                noise in 0usize..4,
            ) {
                let mut arena = Arena::new();
                let mut list = ChainList::for_node::<Cell>();
                for &v in &vals {
                    arena.alloc(noise);
                    let c = cell(&mut arena, v);
                    list.push_and_link(&mut arena, c);
                }
                prop_assert_eq!(values(&list, &arena), vals);
            }
        }
    }
}

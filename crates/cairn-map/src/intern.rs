//! String interning on top of the arena hash map.
//!
//! Map keys are compared by value, and a [`StrRef`] key is its address,
//! so two copies of the same text are two different keys. Interning
//! hands back the same [`StrRef`] for equal text, which makes string
//! keys usable with [`HashMap`] and [`TaggedStore`](crate::TaggedStore).

use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

use cairn_arena::{Arena, StableArray, StrRef};
use cairn_core::Key;
use tracing::trace;

use crate::map::HashMap;

/// Content-addressed string table.
///
/// Strings are grouped by a 64-bit content hash; each group is a small
/// array of distinct strings compared byte for byte, so hash collisions
/// are harmless. Copyable handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interner {
    table: HashMap<StableArray<StrRef>>,
}

fn content_key(bytes: &[u8]) -> Key {
    Key(BuildHasherDefault::<DefaultHasher>::default().hash_one(bytes))
}

impl Interner {
    /// Create an interner with `buckets` hash buckets.
    pub fn create(arena: &mut Arena, buckets: usize) -> Self {
        Self {
            table: HashMap::create(arena, buckets),
        }
    }

    /// The canonical handle for `s`, allocating it on first sight.
    pub fn intern(&self, arena: &mut Arena, s: &str) -> StrRef {
        let bytes = s.as_bytes();
        let key = content_key(bytes);
        match self.table.get(arena, key) {
            Some(group) => {
                let existing = group
                    .current(arena)
                    .iter(arena)
                    .find(|candidate| candidate.eq_bytes(arena, bytes));
                if let Some(found) = existing {
                    return found;
                }
                let fresh = StrRef::alloc_bytes(arena, bytes);
                group.push(arena, fresh, 0);
                trace!(len = bytes.len(), group_len = group.len(arena), "interned colliding string");
                fresh
            }
            None => {
                let group = StableArray::create(arena, 1);
                let fresh = StrRef::alloc_bytes(arena, bytes);
                group.push_unchecked(arena, fresh);
                self.table.insert(arena, key, group);
                trace!(len = bytes.len(), "interned string");
                fresh
            }
        }
    }

    /// The canonical handle for `s`, if it was interned before.
    pub fn lookup(&self, arena: &Arena, s: &str) -> Option<StrRef> {
        let bytes = s.as_bytes();
        let group = self.table.get(arena, content_key(bytes))?;
        group
            .current(arena)
            .iter(arena)
            .find(|candidate| candidate.eq_bytes(arena, bytes))
    }

    /// Number of distinct strings interned.
    pub fn len(&self, arena: &Arena) -> usize {
        self.table.values(arena).map(|group| group.len(arena)).sum()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self, arena: &Arena) -> bool {
        self.table.entry_count(arena) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_text_yields_same_handle() {
        let mut arena = Arena::new();
        let interner = Interner::create(&mut arena, 16);
        let a = interner.intern(&mut arena, "name");
        let b = interner.intern(&mut arena, "name");
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
        assert_eq!(interner.len(&arena), 1);
    }

    #[test]
    fn distinct_text_yields_distinct_handles() {
        let mut arena = Arena::new();
        let interner = Interner::create(&mut arena, 16);
        let a = interner.intern(&mut arena, "left");
        let b = interner.intern(&mut arena, "right");
        assert_ne!(a, b);
        assert_eq!(a.to_string_lossy(&arena), "left");
        assert_eq!(b.to_string_lossy(&arena), "right");
        assert_eq!(interner.len(&arena), 2);
    }

    #[test]
    fn lookup_does_not_allocate() {
        let mut arena = Arena::new();
        let interner = Interner::create(&mut arena, 4);
        assert!(interner.is_empty(&arena));
        let used = arena.used_words();
        assert_eq!(interner.lookup(&arena, "missing"), None);
        assert_eq!(arena.used_words(), used);

        let s = interner.intern(&mut arena, "present");
        assert_eq!(interner.lookup(&arena, "present"), Some(s));
    }

    #[test]
    fn single_bucket_still_separates_strings() {
        let mut arena = Arena::new();
        let interner = Interner::create(&mut arena, 1);
        let words = ["a", "b", "c", "a", "", "b"];
        let handles: Vec<StrRef> = words.iter().map(|w| interner.intern(&mut arena, w)).collect();
        assert_eq!(handles[0], handles[3]);
        assert_eq!(handles[1], handles[5]);
        assert_ne!(handles[0], handles[2]);
        assert_eq!(interner.len(&arena), 4);
    }
}

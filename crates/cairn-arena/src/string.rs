//! Byte strings stored in the arena.
//!
//! Layout: one word of byte length, then the bytes packed eight to a
//! word in little-endian order. The tail of the last word is zero.

use std::fmt;

use cairn_core::{Addr, Key, Slot, Word};
use smallvec::SmallVec;

use crate::arena::Arena;

const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Bytes copied out of the arena. Short strings stay on the stack.
pub type StrBytes = SmallVec<[u8; 32]>;

/// Handle to an immutable byte string in an [`Arena`].
///
/// Equality of handles is identity, not content. Intern strings (see
/// `cairn_map::Interner`) when equal content must yield equal keys.
///
/// A handle decoded from a zero word is null: it can be stored, compared,
/// and tested with [`is_null`](Self::is_null), but reading through it
/// panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrRef(Option<Addr>);

impl StrRef {
    /// Copy `s` into the arena.
    pub fn alloc(arena: &mut Arena, s: &str) -> Self {
        Self::alloc_bytes(arena, s.as_bytes())
    }

    /// Copy raw bytes into the arena.
    pub fn alloc_bytes(arena: &mut Arena, bytes: &[u8]) -> Self {
        let addr = arena.alloc(1 + bytes.len().div_ceil(WORD_BYTES));
        arena.write(addr, 0, bytes.len() as Word);
        for (i, chunk) in bytes.chunks(WORD_BYTES).enumerate() {
            arena.write(addr, 1 + i, pack(chunk));
        }
        Self(Some(addr))
    }

    /// Adopt an existing string address.
    pub fn from_addr(addr: Addr) -> Self {
        Self(Some(addr))
    }

    /// Whether this handle was decoded from an unwritten slot.
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Address of the length word.
    ///
    /// # Panics
    ///
    /// Panics on a null handle.
    pub fn addr(&self) -> Addr {
        self.0.expect("dereferenced a null string handle")
    }

    /// The address as a map key. Panics on a null handle.
    pub fn key(&self) -> Key {
        Key::from(self.addr())
    }

    /// Length in bytes.
    pub fn len(&self, arena: &Arena) -> usize {
        arena.read(self.addr(), 0) as usize
    }

    /// Whether the string is empty.
    pub fn is_empty(&self, arena: &Arena) -> bool {
        self.len(arena) == 0
    }

    /// Copy the bytes out of the arena.
    pub fn to_bytes(&self, arena: &Arena) -> StrBytes {
        let len = self.len(arena);
        let words = arena.words(self.addr().offset(1), len.div_ceil(WORD_BYTES));
        let mut out: StrBytes = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        out.truncate(len);
        out
    }

    /// Copy the bytes out as a `String`, replacing invalid UTF-8.
    pub fn to_string_lossy(&self, arena: &Arena) -> String {
        String::from_utf8_lossy(&self.to_bytes(arena)).into_owned()
    }

    /// Compare contents with `bytes` without copying.
    pub fn eq_bytes(&self, arena: &Arena, bytes: &[u8]) -> bool {
        if self.len(arena) != bytes.len() {
            return false;
        }
        let words = arena.words(self.addr().offset(1), bytes.len().div_ceil(WORD_BYTES));
        words
            .iter()
            .zip(bytes.chunks(WORD_BYTES))
            .all(|(&w, chunk)| w == pack(chunk))
    }

    /// Compare contents with `s` without copying.
    pub fn eq_str(&self, arena: &Arena, s: &str) -> bool {
        self.eq_bytes(arena, s.as_bytes())
    }
}

fn pack(chunk: &[u8]) -> Word {
    let mut buf = [0u8; WORD_BYTES];
    buf[..chunk.len()].copy_from_slice(chunk);
    Word::from_le_bytes(buf)
}

impl fmt::Display for StrRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(addr) => write!(f, "str{addr}"),
            None => f.write_str("str@null"),
        }
    }
}

/// Stored as the string address. The zero word loads as a null handle.
impl Slot for StrRef {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        self.0.store(out);
    }

    fn load(words: &[Word]) -> Self {
        Self(Addr::from_word(words[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::DynamicArray;

    #[test]
    fn ascii_round_trip() {
        let mut arena = Arena::new();
        let s = StrRef::alloc(&mut arena, "hello, arena");
        assert_eq!(s.len(&arena), 12);
        assert_eq!(s.to_string_lossy(&arena), "hello, arena");
    }

    #[test]
    fn empty_string_takes_one_word() {
        let mut arena = Arena::new();
        let before = arena.used_words();
        let s = StrRef::alloc(&mut arena, "");
        assert!(s.is_empty(&arena));
        assert_eq!(arena.used_words() - before, 1);
        assert!(s.eq_str(&arena, ""));
    }

    #[test]
    fn exact_word_multiple() {
        let mut arena = Arena::new();
        let s = StrRef::alloc(&mut arena, "abcdefgh");
        assert_eq!(s.to_bytes(&arena).as_slice(), b"abcdefgh");
        assert!(s.eq_str(&arena, "abcdefgh"));
        assert!(!s.eq_str(&arena, "abcdefgi"));
    }

    #[test]
    fn trailing_zero_bytes_are_significant() {
        let mut arena = Arena::new();
        let s = StrRef::alloc_bytes(&mut arena, b"ab\0");
        assert!(!s.eq_bytes(&arena, b"ab"));
        assert!(s.eq_bytes(&arena, b"ab\0"));
    }

    #[test]
    fn multibyte_utf8_survives() {
        let mut arena = Arena::new();
        let s = StrRef::alloc(&mut arena, "größe ✓");
        assert_eq!(s.to_string_lossy(&arena), "größe ✓");
    }

    #[test]
    fn equal_content_distinct_handles() {
        let mut arena = Arena::new();
        let a = StrRef::alloc(&mut arena, "k");
        let b = StrRef::alloc(&mut arena, "k");
        assert_ne!(a, b);
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn reserved_slot_reads_as_null_handle() {
        let mut arena = Arena::new();
        let mut names = DynamicArray::<StrRef>::create(&mut arena, 4);
        let s = StrRef::alloc(&mut arena, "kept");
        names.push(&mut arena, s, 0);

        let blank = names.get(&arena, 2).unwrap();
        assert!(blank.is_null());
        assert!(!names.get(&arena, 0).unwrap().is_null());
        assert_eq!(blank.to_string(), "str@null");
    }

    #[test]
    #[should_panic(expected = "null string handle")]
    fn reading_through_null_handle_panics() {
        let arena = Arena::new();
        StrRef::load(&[0]).len(&arena);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..100)) {
                let mut arena = Arena::new();
                let s = StrRef::alloc_bytes(&mut arena, &bytes);
                let got = s.to_bytes(&arena);
                prop_assert_eq!(got.as_slice(), bytes.as_slice());
                prop_assert!(s.eq_bytes(&arena, &bytes));
            }
        }
    }
}

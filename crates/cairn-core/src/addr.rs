//! Arena addresses and map keys.

use std::fmt;
use std::num::NonZeroUsize;

/// The unit of arena storage. Every slot, header field, and link is
/// a whole number of words.
pub type Word = u64;

/// A word index into an arena.
///
/// Address zero is reserved by every arena, so a stored word of `0`
/// always means "no address". `Option<Addr>` uses that niche directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Addr(NonZeroUsize);

impl Addr {
    /// Wrap a raw word index. Returns `None` for the reserved index 0.
    pub fn new(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    /// The raw word index.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The address `words` words past this one.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows `usize`.
    pub fn offset(self, words: usize) -> Self {
        let index = self
            .0
            .get()
            .checked_add(words)
            .expect("arena address overflow");
        // index >= self > 0
        Self(NonZeroUsize::new(index).expect("offset of a non-zero address is non-zero"))
    }

    /// Decode a stored link word. `0` decodes to `None`.
    pub fn from_word(word: Word) -> Option<Self> {
        Self::new(word as usize)
    }

    /// Encode as a link word.
    pub fn to_word(self) -> Word {
        self.0.get() as Word
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A hash map key.
///
/// Keys are plain integers: either caller-chosen numbers or the
/// address of some arena object (an interned string, say). The map
/// uses the key's own value for bucket selection, so keys are assumed
/// to be reasonably well distributed already.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub u64);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Key {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<Addr> for Key {
    fn from(addr: Addr) -> Self {
        Self(addr.to_word())
    }
}

//! Fixed-width word encoding for container slots.

use crate::addr::{Addr, Word};

/// A value that occupies a fixed number of arena words.
///
/// Every container stores its elements as slots of `WORDS` words. The
/// `load` receives whatever words sit in the slot, including the
/// all-zero pattern of a reserved but never written slot, and must not
/// panic on it. Scalars decode it as their zero value; handles decode
/// it as a null handle that panics only when dereferenced.
pub trait Slot: Sized {
    /// Width of one slot in words. Must be at least 1.
    const WORDS: usize;

    /// Encode `self` into exactly `WORDS` words.
    fn store(&self, out: &mut [Word]);

    /// Decode a value from exactly `WORDS` words.
    fn load(words: &[Word]) -> Self;
}

impl Slot for u64 {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = *self;
    }

    fn load(words: &[Word]) -> Self {
        words[0]
    }
}

impl Slot for i64 {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = *self as Word;
    }

    fn load(words: &[Word]) -> Self {
        words[0] as i64
    }
}

impl Slot for usize {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = *self as Word;
    }

    fn load(words: &[Word]) -> Self {
        words[0] as usize
    }
}

impl Slot for f64 {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = self.to_bits();
    }

    fn load(words: &[Word]) -> Self {
        f64::from_bits(words[0])
    }
}

impl Slot for bool {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = Word::from(*self);
    }

    fn load(words: &[Word]) -> Self {
        words[0] != 0
    }
}

/// Addresses are stored as link words: `None` is the zero word.
impl Slot for Option<Addr> {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = self.map_or(0, Addr::to_word);
    }

    fn load(words: &[Word]) -> Self {
        Addr::from_word(words[0])
    }
}

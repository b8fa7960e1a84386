//! The word arena and its bump cursor.
//!
//! An [`Arena`] is a `Vec<Word>` whose length *is* the cursor: every
//! allocation resizes the vector, so any index below the cursor is a
//! valid, zero-initialised word and any index at or past it panics.

use cairn_core::{Addr, Slot, Word};
use tracing::debug;

use crate::config::ArenaConfig;

/// Allocation counters for an [`Arena`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Number of calls to [`Arena::alloc`].
    pub allocations: u64,
    /// Number of successful in-place extensions.
    pub extensions: u64,
    /// Number of array relocations.
    pub relocations: u64,
    /// Total words copied by relocations.
    pub relocated_words: u64,
}

/// Linear, append-only word storage with a single bump cursor.
///
/// Addresses are strictly increasing and never reused. Word 0 is
/// reserved at construction so that a stored zero can serve as the
/// "no address" sentinel for links.
///
/// All mutation goes through `&mut Arena`, which serialises cursor
/// advances for the whole execution context. Containers hold only
/// addresses into the arena and take it as an explicit argument.
pub struct Arena {
    /// Backing storage. `data.len()` is the cursor.
    data: Vec<Word>,
    config: ArenaConfig,
    stats: ArenaStats,
}

impl Arena {
    /// Create an arena with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an arena with the given configuration.
    pub fn with_config(config: ArenaConfig) -> Self {
        let mut data = Vec::with_capacity(config.initial_words.max(1));
        // Reserved null word.
        data.push(0);
        debug!(
            initial_words = config.initial_words,
            initial_bytes = config.initial_bytes(),
            grow_in_place = config.grow_in_place,
            "arena created"
        );
        Self {
            data,
            config,
            stats: ArenaStats::default(),
        }
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Bump-allocate `words` zeroed words and return the first address.
    ///
    /// A zero-word allocation returns the current cursor without
    /// advancing it.
    pub fn alloc(&mut self, words: usize) -> Addr {
        let addr = self.cursor();
        let end = self
            .data
            .len()
            .checked_add(words)
            .expect("arena cursor overflow");
        self.data.resize(end, 0);
        self.stats.allocations += 1;
        addr
    }

    /// Allocate space for one value and store it.
    pub fn alloc_slot<T: Slot>(&mut self, value: &T) -> Addr {
        let addr = self.alloc(T::WORDS);
        self.store(addr, 0, value);
        addr
    }

    /// The next address [`alloc`](Self::alloc) will hand out.
    pub fn cursor(&self) -> Addr {
        // data always holds at least the reserved word.
        Addr::new(self.data.len()).expect("arena cursor is never zero")
    }

    /// Whether `end` is exactly the arena cursor, i.e. the object ending
    /// there is the most recent allocation.
    ///
    /// The cursor only moves forward, so a match proves that nothing else
    /// has been allocated since that object last grew.
    pub fn is_tip(&self, end: Addr) -> bool {
        end.get() == self.data.len()
    }

    /// Grow the allocation ending at `end` by `words` without moving it.
    ///
    /// Succeeds only when in-place growth is enabled and `end` is the
    /// arena tip. On failure nothing changes and the caller must relocate.
    pub fn try_extend(&mut self, end: Addr, words: usize) -> bool {
        if !self.config.grow_in_place || !self.is_tip(end) {
            return false;
        }
        self.data.resize(self.data.len() + words, 0);
        self.stats.extensions += 1;
        true
    }

    /// Read the word at `addr + offset`.
    ///
    /// # Panics
    ///
    /// Panics if the word lies past the cursor.
    pub fn read(&self, addr: Addr, offset: usize) -> Word {
        self.data[addr.get() + offset]
    }

    /// Write the word at `addr + offset`.
    ///
    /// # Panics
    ///
    /// Panics if the word lies past the cursor.
    pub fn write(&mut self, addr: Addr, offset: usize, word: Word) {
        self.data[addr.get() + offset] = word;
    }

    /// Shared view of `len` words starting at `addr`.
    pub fn words(&self, addr: Addr, len: usize) -> &[Word] {
        let start = addr.get();
        &self.data[start..start + len]
    }

    /// Mutable view of `len` words starting at `addr`.
    pub fn words_mut(&mut self, addr: Addr, len: usize) -> &mut [Word] {
        let start = addr.get();
        &mut self.data[start..start + len]
    }

    /// Decode a slot value stored at `addr + offset`.
    pub fn load<T: Slot>(&self, addr: Addr, offset: usize) -> T {
        T::load(self.words(addr.offset(offset), T::WORDS))
    }

    /// Encode a slot value at `addr + offset`.
    pub fn store<T: Slot>(&mut self, addr: Addr, offset: usize, value: &T) {
        value.store(self.words_mut(addr.offset(offset), T::WORDS));
    }

    /// Copy `len` words from `src` to `dst`. The ranges may overlap.
    pub fn copy_words(&mut self, src: Addr, dst: Addr, len: usize) {
        let start = src.get();
        self.data.copy_within(start..start + len, dst.get());
    }

    /// Words handed out so far, including the reserved null word.
    pub fn used_words(&self) -> usize {
        self.data.len()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<Word>()
    }

    /// Allocation counters since creation.
    pub fn stats(&self) -> ArenaStats {
        self.stats
    }

    pub(crate) fn note_relocation(&mut self, words: usize) {
        self.stats.relocations += 1;
        self.stats.relocated_words += words as u64;
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

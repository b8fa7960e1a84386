//! Arena configuration parameters.

/// Configuration for an [`Arena`](crate::Arena).
///
/// Fixed for the lifetime of the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of words to reserve up front.
    ///
    /// The backing store still grows on demand past this; reserving only
    /// avoids early reallocation of the host buffer. Default: 4096.
    pub initial_words: usize,

    /// Whether a full array that ends at the arena cursor may grow in
    /// place instead of relocating.
    ///
    /// Both paths are observably equivalent apart from allocation cost.
    /// Default: `true`.
    pub grow_in_place: bool,
}

impl ArenaConfig {
    /// Default number of words reserved at creation (32KB).
    pub const DEFAULT_INITIAL_WORDS: usize = 4096;

    /// Create a config with the given up-front reservation.
    pub fn new(initial_words: usize) -> Self {
        Self {
            initial_words,
            grow_in_place: true,
        }
    }

    /// Same config with in-place growth switched on or off.
    pub fn with_grow_in_place(mut self, enabled: bool) -> Self {
        self.grow_in_place = enabled;
        self
    }

    /// Size of the up-front reservation in bytes.
    pub fn initial_bytes(&self) -> usize {
        self.initial_words * std::mem::size_of::<cairn_core::Word>()
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_WORDS)
    }
}

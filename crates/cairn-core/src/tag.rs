//! Value tags for the tagged store.

use std::fmt;

use crate::addr::Word;
use crate::slot::Slot;

/// Discriminates what a tagged store entry holds.
///
/// [`Tag::Any`] is the wildcard: a value stored with it is never type
/// checked, and a lookup that expects it accepts any stored tag. It is
/// encoded as the zero word so a blank slot reads back as unchecked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Unchecked. Matches every other tag.
    Any,
    /// Address of an arena string.
    String,
    /// Inline `f64` bits.
    Number,
    /// Handle of a nested tagged store.
    Object,
    /// Handle of a stable array of tagged values.
    Array,
    /// Inline boolean.
    Bool,
    /// No payload.
    Null,
}

impl Tag {
    /// Encode as a word.
    pub fn to_word(self) -> Word {
        match self {
            Self::Any => 0,
            Self::String => 1,
            Self::Number => 2,
            Self::Object => 3,
            Self::Array => 4,
            Self::Bool => 5,
            Self::Null => 6,
        }
    }

    /// Decode a word. Unknown encodings yield `None`.
    pub fn from_word(word: Word) -> Option<Self> {
        Some(match word {
            0 => Self::Any,
            1 => Self::String,
            2 => Self::Number,
            3 => Self::Object,
            4 => Self::Array,
            5 => Self::Bool,
            6 => Self::Null,
            _ => return None,
        })
    }

    /// Whether a value stored under `self` may be read as `expected`.
    pub fn accepts(self, expected: Tag) -> bool {
        self == Self::Any || expected == Self::Any || self == expected
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::String => "string",
            Self::Number => "number",
            Self::Object => "object",
            Self::Array => "array",
            Self::Bool => "bool",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

impl Slot for Tag {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        out[0] = self.to_word();
    }

    /// Unknown encodings load as [`Tag::Any`].
    fn load(words: &[Word]) -> Self {
        Self::from_word(words[0]).unwrap_or(Self::Any)
    }
}

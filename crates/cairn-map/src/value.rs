//! Tagged values for the [`TaggedStore`](crate::TaggedStore).

use cairn_arena::{StableArray, StrRef};
use cairn_core::{Addr, Slot, Tag, Word};

use crate::store::TaggedStore;

/// The raw stored form of a tagged value: a tag word and a payload word.
///
/// The payload is either inline (number bits, boolean) or the address of
/// an arena object, depending on the tag. Every word pattern is a valid
/// `Tagged`; the all-zero pattern is `{ Any, 0 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tagged {
    /// What the payload holds.
    pub tag: Tag,
    /// Inline scalar or arena address.
    pub bits: Word,
}

impl Tagged {
    /// Pair a tag with a payload.
    pub fn new(tag: Tag, bits: Word) -> Self {
        Self { tag, bits }
    }

    /// Decode into a typed value.
    ///
    /// Returns `None` when a handle tag (string, object, array) carries
    /// the null payload.
    pub fn to_value(self) -> Option<Value> {
        let addr = || Addr::from_word(self.bits);
        Some(match self.tag {
            Tag::Any => Value::Raw(self.bits),
            Tag::String => Value::Str(StrRef::from_addr(addr()?)),
            Tag::Number => Value::Number(f64::from_bits(self.bits)),
            Tag::Object => Value::Object(TaggedStore::from_addr(addr()?)),
            Tag::Array => Value::Array(StableArray::from_cell(addr()?)),
            Tag::Bool => Value::Bool(self.bits != 0),
            Tag::Null => Value::Null,
        })
    }
}

/// Stored as two words: `[tag, bits]`.
impl Slot for Tagged {
    const WORDS: usize = 2;

    fn store(&self, out: &mut [Word]) {
        self.tag.store(&mut out[0..1]);
        out[1] = self.bits;
    }

    fn load(words: &[Word]) -> Self {
        Self {
            tag: Tag::load(&words[0..1]),
            bits: words[1],
        }
    }
}

/// A typed value that can live in a tagged store or a value array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// Unchecked payload, stored under [`Tag::Any`].
    Raw(Word),
    /// An arena string.
    Str(StrRef),
    /// A number.
    Number(f64),
    /// A nested store.
    Object(TaggedStore),
    /// A growable array of values.
    Array(StableArray<Value>),
    /// A boolean.
    Bool(bool),
    /// Explicit null.
    Null,
}

impl Value {
    /// The tag this value is stored under.
    pub fn tag(&self) -> Tag {
        match self {
            Self::Raw(_) => Tag::Any,
            Self::Str(_) => Tag::String,
            Self::Number(_) => Tag::Number,
            Self::Object(_) => Tag::Object,
            Self::Array(_) => Tag::Array,
            Self::Bool(_) => Tag::Bool,
            Self::Null => Tag::Null,
        }
    }

    /// Encode as tag and payload.
    pub fn to_tagged(&self) -> Tagged {
        let bits = match *self {
            Self::Raw(bits) => bits,
            Self::Str(s) => handle_word(&s),
            Self::Number(n) => n.to_bits(),
            Self::Object(o) => handle_word(&o),
            Self::Array(a) => handle_word(&a),
            Self::Bool(b) => Word::from(b),
            Self::Null => 0,
        };
        Tagged::new(self.tag(), bits)
    }
}

/// A one-word handle's stored form; null handles encode as zero.
fn handle_word<H: Slot>(handle: &H) -> Word {
    let mut word: [Word; 1] = [0];
    handle.store(&mut word);
    word[0]
}

/// Stored as two words: `[tag, bits]`. A handle tag with a null
/// payload loads as [`Value::Null`].
impl Slot for Value {
    const WORDS: usize = 2;

    fn store(&self, out: &mut [Word]) {
        self.to_tagged().store(out);
    }

    fn load(words: &[Word]) -> Self {
        Tagged::load(words).to_value().unwrap_or(Value::Null)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<StrRef> for Value {
    fn from(s: StrRef) -> Self {
        Self::Str(s)
    }
}

impl From<TaggedStore> for Value {
    fn from(o: TaggedStore) -> Self {
        Self::Object(o)
    }
}

impl From<StableArray<Value>> for Value {
    fn from(a: StableArray<Value>) -> Self {
        Self::Array(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_arena::Arena;

    #[test]
    fn blank_slot_is_raw_zero() {
        assert_eq!(Value::load(&[0, 0]), Value::Raw(0));
        assert_eq!(Tagged::load(&[0, 0]), Tagged::new(Tag::Any, 0));
    }

    #[test]
    fn handle_tag_with_null_payload_is_null() {
        assert_eq!(Tagged::new(Tag::String, 0).to_value(), None);
        assert_eq!(Value::load(&[Tag::Object.to_word(), 0]), Value::Null);
    }

    #[test]
    fn scalar_values_round_trip() {
        for v in [Value::Number(-2.5), Value::Bool(true), Value::Null, Value::Raw(42)] {
            let mut buf = [0; 2];
            v.store(&mut buf);
            assert_eq!(Value::load(&buf), v);
        }
    }

    #[test]
    fn handle_values_round_trip() {
        let mut arena = Arena::new();
        let s = StrRef::alloc(&mut arena, "x");
        let o = TaggedStore::create(&mut arena, 2);
        let a = StableArray::<Value>::create(&mut arena, 0);
        for v in [Value::from(s), Value::from(o), Value::from(a)] {
            let mut buf = [0; 2];
            v.store(&mut buf);
            assert_eq!(Value::load(&buf), v);
        }
    }

    #[test]
    fn null_handle_encodes_as_null_payload() {
        let null = Value::Str(StrRef::load(&[0]));
        assert_eq!(null.to_tagged(), Tagged::new(Tag::String, 0));
        let mut buf = [0; 2];
        null.store(&mut buf);
        assert_eq!(Value::load(&buf), Value::Null);
    }

    #[test]
    fn tags_match_variants() {
        assert_eq!(Value::from(1.0).tag(), Tag::Number);
        assert_eq!(Value::from(false).tag(), Tag::Bool);
        assert_eq!(Value::Raw(0).tag(), Tag::Any);
    }
}

//! Type-tagged key-value store.
//!
//! A [`TaggedStore`] is a [`HashMap`] whose values carry a [`Tag`]
//! alongside their payload, so one store can hold strings, numbers,
//! nested stores, arrays, booleans, and nulls under different keys.
//! Typed reads check the tag and fault on a mismatch.
//!
//! There is no text parser: stores are built by inserting values.

use std::fmt;

use cairn_arena::{Arena, StableArray, StrRef};
use cairn_core::{Addr, ArenaError, Key, Slot, Tag, Word};

use crate::map::HashMap;
use crate::value::{Tagged, Value};

/// A JSON-like container keyed by [`Key`].
///
/// Copyable handle; all copies see the same entries.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TaggedStore(HashMap<Tagged>);

impl TaggedStore {
    /// Create a store with `capacity` buckets.
    pub fn create(arena: &mut Arena, capacity: usize) -> Self {
        Self(HashMap::create(arena, capacity))
    }

    /// Adopt an existing store address.
    pub fn from_addr(addr: Addr) -> Self {
        Self(HashMap::from_addr(addr))
    }

    /// Whether this handle was decoded from an unwritten slot.
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Address of the underlying bucket array. Panics on a null handle.
    pub fn addr(&self) -> Addr {
        self.0.addr()
    }

    /// The underlying map of raw tagged entries.
    pub fn map(&self) -> HashMap<Tagged> {
        self.0
    }

    /// Insert or overwrite. An existing entry takes both the new value
    /// and the new tag. Returns the previous raw entry.
    pub fn insert(&self, arena: &mut Arena, key: Key, value: impl Into<Value>) -> Option<Tagged> {
        self.0.insert(arena, key, value.into().to_tagged())
    }

    /// Insert or overwrite a raw payload under an explicit tag.
    pub fn insert_tagged(
        &self,
        arena: &mut Arena,
        key: Key,
        bits: Word,
        tag: Tag,
    ) -> Option<Tagged> {
        self.0.insert(arena, key, Tagged::new(tag, bits))
    }

    /// Append without checking for an existing key.
    ///
    /// Same shadowing hazard as [`HashMap::insert_unchecked`].
    pub fn insert_unchecked(&self, arena: &mut Arena, key: Key, value: impl Into<Value>) {
        self.0
            .insert_unchecked(arena, key, value.into().to_tagged())
    }

    /// Raw payload for `key`, checked against `expected`.
    ///
    /// Fails with [`ArenaError::TypeMismatch`] when the stored tag is not
    /// [`Tag::Any`] and differs from `expected`. Passing `Tag::Any` as
    /// `expected` skips the check.
    pub fn get(&self, arena: &Arena, key: Key, expected: Tag) -> Result<Option<Word>, ArenaError> {
        let Some(entry) = self.0.get(arena, key) else {
            return Ok(None);
        };
        if !entry.tag.accepts(expected) {
            return Err(ArenaError::TypeMismatch {
                key,
                expected,
                found: entry.tag,
            });
        }
        Ok(Some(entry.bits))
    }

    /// Raw payload for `key` without any tag check.
    pub fn get_any(&self, arena: &Arena, key: Key) -> Option<Word> {
        self.0.get(arena, key).map(|entry| entry.bits)
    }

    fn get_addr(&self, arena: &Arena, key: Key, expected: Tag) -> Result<Option<Addr>, ArenaError> {
        Ok(self.get(arena, key, expected)?.and_then(Addr::from_word))
    }

    /// String value for `key`. A null payload reads as absent.
    pub fn get_string(&self, arena: &Arena, key: Key) -> Result<Option<StrRef>, ArenaError> {
        Ok(self.get_addr(arena, key, Tag::String)?.map(StrRef::from_addr))
    }

    /// Numeric value for `key`.
    pub fn get_number(&self, arena: &Arena, key: Key) -> Result<Option<f64>, ArenaError> {
        Ok(self.get(arena, key, Tag::Number)?.map(f64::from_bits))
    }

    /// Nested store for `key`. A null payload reads as absent.
    pub fn get_object(&self, arena: &Arena, key: Key) -> Result<Option<TaggedStore>, ArenaError> {
        Ok(self.get_addr(arena, key, Tag::Object)?.map(TaggedStore::from_addr))
    }

    /// Array for `key`. A null payload reads as absent.
    pub fn get_array(
        &self,
        arena: &Arena,
        key: Key,
    ) -> Result<Option<StableArray<Value>>, ArenaError> {
        Ok(self.get_addr(arena, key, Tag::Array)?.map(StableArray::from_cell))
    }

    /// Boolean value for `key`.
    pub fn get_bool(&self, arena: &Arena, key: Key) -> Result<Option<bool>, ArenaError> {
        Ok(self.get(arena, key, Tag::Bool)?.map(|bits| bits != 0))
    }

    /// Typed value for `key`, whatever its tag.
    pub fn get_value(&self, arena: &Arena, key: Key) -> Option<Value> {
        self.0
            .get(arena, key)
            .map(|entry| entry.to_value().unwrap_or(Value::Null))
    }

    /// Tag stored for `key`, without reading the payload.
    pub fn check_type(&self, arena: &Arena, key: Key) -> Option<Tag> {
        self.0.get(arena, key).map(|entry| entry.tag)
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, arena: &Arena, key: Key) -> bool {
        self.0.contains_key(arena, key)
    }
}

/// Stored as the bucket array address. The zero word loads as a null
/// handle.
impl Slot for TaggedStore {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        self.0.store(out);
    }

    fn load(words: &[Word]) -> Self {
        Self(HashMap::load(words))
    }
}

impl fmt::Debug for TaggedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TaggedStore").field(&self.0).finish()
    }
}

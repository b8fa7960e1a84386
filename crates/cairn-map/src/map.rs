//! Fixed-bucket chained hash map.
//!
//! Entry record layout, in words:
//!
//! ```text
//! 0: key
//! 1: next (link to the following entry in the bucket chain)
//! 2: value (V::WORDS words)
//! ```

use std::fmt;
use std::marker::PhantomData;

use cairn_arena::{Arena, DynamicArray};
use cairn_core::{Addr, ArenaError, Key, Slot, Word};
use cairn_list::ChainList;

const KEY: usize = 0;
const NEXT: usize = 1;
const VALUE: usize = 2;

/// A hash map from [`Key`] to `V` with a bucket count fixed at creation.
///
/// The handle is the address of the bucket array. The bucket array never
/// grows, so the handle never goes stale and can be copied freely.
///
/// Two insertion paths exist. [`insert`](Self::insert) scans the chain
/// and overwrites an existing key. [`insert_unchecked`](Self::insert_unchecked)
/// appends blindly: if the key was already present, lookups keep
/// returning the older entry and the new one is unreachable.
///
/// A handle decoded from a zero word is null; every operation through
/// it panics.
pub struct HashMap<V> {
    buckets: Option<Addr>,
    _value: PhantomData<fn() -> V>,
}

impl<V> Clone for HashMap<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for HashMap<V> {}

impl<V: Slot> HashMap<V> {
    /// Create a map with `bucket_count` empty buckets (at least one).
    pub fn create(arena: &mut Arena, bucket_count: usize) -> Self {
        let n = bucket_count.max(1);
        let buckets = DynamicArray::<ChainList>::create(arena, n);
        for _ in 0..n {
            buckets.push_unchecked(arena, ChainList::new(NEXT));
        }
        Self::from_addr(buckets.addr())
    }

    /// Adopt an existing bucket array address.
    pub fn from_addr(buckets: Addr) -> Self {
        Self {
            buckets: Some(buckets),
            _value: PhantomData,
        }
    }

    /// Whether this handle was decoded from an unwritten slot.
    pub fn is_null(&self) -> bool {
        self.buckets.is_none()
    }

    /// Address of the bucket array.
    ///
    /// # Panics
    ///
    /// Panics on a null handle.
    pub fn addr(&self) -> Addr {
        self.buckets.expect("dereferenced a null hash map handle")
    }

    fn bucket_array(&self) -> DynamicArray<ChainList> {
        DynamicArray::from_addr(self.addr())
    }

    /// Number of buckets. Never changes after creation.
    pub fn bucket_count(&self, arena: &Arena) -> usize {
        self.bucket_array().len(arena)
    }

    /// Bucket index for `key`: `key mod bucket_count`.
    pub fn bucket_of(&self, arena: &Arena, key: Key) -> usize {
        (key.0 % self.bucket_count(arena) as u64) as usize
    }

    fn chain(&self, arena: &Arena, bucket: usize) -> ChainList {
        self.bucket_array().get_unchecked(arena, bucket)
    }

    fn find(&self, arena: &Arena, key: Key) -> Option<Addr> {
        self.chain(arena, self.bucket_of(arena, key))
            .iter(arena)
            .find(|&entry| arena.read(entry, KEY) == key.0)
    }

    fn append(&self, arena: &mut Arena, key: Key, value: &V) {
        let bucket = self.bucket_of(arena, key);
        let mut chain = self.chain(arena, bucket);
        let entry = arena.alloc(VALUE + V::WORDS);
        arena.write(entry, KEY, key.0 as Word);
        arena.store(entry, VALUE, value);
        chain.push_and_link(arena, entry);
        self.bucket_array().set_unchecked(arena, bucket, chain);
    }

    /// Insert or overwrite. Returns the previous value for `key`.
    pub fn insert(&self, arena: &mut Arena, key: Key, value: V) -> Option<V> {
        match self.find(arena, key) {
            Some(entry) => {
                let old = arena.load(entry, VALUE);
                arena.store(entry, VALUE, &value);
                Some(old)
            }
            None => {
                self.append(arena, key, &value);
                None
            }
        }
    }

    /// Append an entry without looking for an existing one.
    ///
    /// Cheaper than [`insert`](Self::insert), but if `key` is already
    /// present the new entry is shadowed: lookups return the first match
    /// in the chain, which is the older entry. The shadowed entry is
    /// never reclaimed.
    pub fn insert_unchecked(&self, arena: &mut Arena, key: Key, value: V) {
        self.append(arena, key, &value);
    }

    /// Overwrite the value for `key` only if it is present.
    ///
    /// Returns whether an entry was updated. Never creates an entry.
    pub fn update(&self, arena: &mut Arena, key: Key, value: V) -> bool {
        match self.find(arena, key) {
            Some(entry) => {
                arena.store(entry, VALUE, &value);
                true
            }
            None => false,
        }
    }

    /// Value of the first entry for `key` in its bucket chain.
    pub fn get(&self, arena: &Arena, key: Key) -> Option<V> {
        self.find(arena, key).map(|entry| arena.load(entry, VALUE))
    }

    /// Whether an entry for `key` exists. Same cost as [`get`](Self::get).
    pub fn contains_key(&self, arena: &Arena, key: Key) -> bool {
        self.find(arena, key).is_some()
    }

    /// Number of entries chained in `bucket`, shadowed ones included.
    pub fn chain_len(&self, arena: &Arena, bucket: usize) -> Result<usize, ArenaError> {
        let chain = self.bucket_array().get(arena, bucket)?;
        Ok(chain.iter(arena).count())
    }

    /// Every entry value, bucket by bucket, in chain order.
    ///
    /// There is no key order. Shadowed entries are included.
    pub fn values<'a>(&self, arena: &'a Arena) -> impl Iterator<Item = V> + 'a
    where
        V: 'a,
    {
        let buckets = self.bucket_array();
        (0..buckets.len(arena))
            .map(move |b| buckets.get_unchecked(arena, b))
            .flat_map(move |chain| chain.iter(arena))
            .map(move |entry| arena.load(entry, VALUE))
    }

    /// Total number of entry records, shadowed ones included.
    pub fn entry_count(&self, arena: &Arena) -> usize {
        self.bucket_array()
            .iter(arena)
            .map(|chain| chain.iter(arena).count())
            .sum()
    }
}

/// Stored as the bucket array address. The zero word loads as a null
/// handle.
impl<V> Slot for HashMap<V> {
    const WORDS: usize = 1;

    fn store(&self, out: &mut [Word]) {
        self.buckets.store(out);
    }

    fn load(words: &[Word]) -> Self {
        Self {
            buckets: Addr::from_word(words[0]),
            _value: PhantomData,
        }
    }
}

impl<V> fmt::Debug for HashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<V> PartialEq for HashMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<V> Eq for HashMap<V> {}

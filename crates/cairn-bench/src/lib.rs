//! Benchmark workloads for the Cairn containers.
//!
//! - [`scrambled_keys`]: deterministic, well-spread map keys
//! - [`filled_map`]: a map preloaded with a key set
//! - [`filled_store`]: a tagged store preloaded with numbers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cairn_arena::Arena;
use cairn_core::Key;
use cairn_map::{HashMap, TaggedStore};

/// `count` distinct keys derived from `seed` with a splitmix64 walk.
///
/// Same seed, same keys, so runs are comparable across machines.
pub fn scrambled_keys(count: usize, seed: u64) -> Vec<Key> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            Key(z ^ (z >> 31))
        })
        .collect()
}

/// A map with `buckets` buckets holding `keys`, each mapped to its index.
pub fn filled_map(arena: &mut Arena, buckets: usize, keys: &[Key]) -> HashMap<u64> {
    let map = HashMap::create(arena, buckets);
    for (i, &key) in keys.iter().enumerate() {
        map.insert_unchecked(arena, key, i as u64);
    }
    map
}

/// A store with `buckets` buckets holding `keys`, each mapped to its
/// index as a number.
pub fn filled_store(arena: &mut Arena, buckets: usize, keys: &[Key]) -> TaggedStore {
    let store = TaggedStore::create(arena, buckets);
    for (i, &key) in keys.iter().enumerate() {
        store.insert_unchecked(arena, key, i as f64);
    }
    store
}

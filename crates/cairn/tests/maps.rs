//! Integration test: hash map, tagged store, and interner working together.

use cairn::prelude::*;
use cairn_test_utils::both_arenas;
use proptest::prelude::*;

#[test]
fn five_buckets_hold_seven_keys() {
    let mut arena = Arena::new();
    let map = HashMap::<u64>::create(&mut arena, 5);
    for k in 0..7 {
        map.insert(&mut arena, Key(k), k);
    }
    assert_eq!(map.bucket_count(&arena), 5);
    for k in 0..7 {
        assert_eq!(map.get(&arena, Key(k)), Some(k));
    }
    // Keys 0/5 and 1/6 share buckets.
    assert_eq!(map.chain_len(&arena, 0), Ok(2));
    assert_eq!(map.chain_len(&arena, 1), Ok(2));
    assert_eq!(map.chain_len(&arena, 4), Ok(1));
}

#[test]
fn checked_insert_overwrites() {
    let mut arena = Arena::new();
    let map = HashMap::<u64>::create(&mut arena, 3);
    assert_eq!(map.insert(&mut arena, Key(8), 1), None);
    assert_eq!(map.insert(&mut arena, Key(8), 2), Some(1));
    assert_eq!(map.get(&arena, Key(8)), Some(2));
    assert_eq!(map.entry_count(&arena), 1);
}

#[test]
fn unchecked_insert_is_shadowed_by_the_original() {
    let mut arena = Arena::new();
    let map = HashMap::<u64>::create(&mut arena, 3);
    map.insert(&mut arena, Key(8), 1);
    map.insert_unchecked(&mut arena, Key(8), 2);

    // The older entry wins and the newer one stays in the chain for good.
    assert_eq!(map.get(&arena, Key(8)), Some(1));
    assert_eq!(map.entry_count(&arena), 2);

    // Overwriting also hits only the older entry.
    assert!(map.update(&mut arena, Key(8), 3));
    assert_eq!(map.get(&arena, Key(8)), Some(3));
    assert_eq!(map.entry_count(&arena), 2);
}

#[test]
fn zero_bucket_hint_still_works() {
    let mut arena = Arena::new();
    let map = HashMap::<bool>::create(&mut arena, 0);
    assert_eq!(map.bucket_count(&arena), 1);
    map.insert(&mut arena, Key(u64::MAX), true);
    assert_eq!(map.get(&arena, Key(u64::MAX)), Some(true));
}

#[test]
fn maps_nest_inside_arrays() {
    for mut arena in both_arenas() {
        let mut tables = DynamicArray::<HashMap<f64>>::create(&mut arena, 0);
        for i in 0..4 {
            let table = HashMap::create(&mut arena, 2);
            table.insert(&mut arena, Key(i), i as f64);
            tables.push(&mut arena, table, 0);
        }
        for (i, table) in tables.iter(&arena).enumerate() {
            assert_eq!(table.get(&arena, Key(i as u64)), Some(i as f64));
        }
    }
}

#[test]
fn tagged_store_with_string_keys() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();

    let mut arena = Arena::new();
    let names = Interner::create(&mut arena, 8);
    let doc = TaggedStore::create(&mut arena, 8);

    let title_key = names.intern(&mut arena, "title").key();
    let size_key = names.intern(&mut arena, "size").key();
    let tags_key = names.intern(&mut arena, "tags").key();
    let meta_key = names.intern(&mut arena, "meta").key();

    let title = StrRef::alloc(&mut arena, "cairn");
    doc.insert(&mut arena, title_key, title);
    doc.insert(&mut arena, size_key, 42.0);

    let tags = StableArray::<Value>::create(&mut arena, 0);
    doc.insert(&mut arena, tags_key, tags);
    for t in ["arena", "map"] {
        let s = StrRef::alloc(&mut arena, t);
        tags.push(&mut arena, Value::Str(s), 0);
    }

    let meta = TaggedStore::create(&mut arena, 2);
    meta.insert(&mut arena, size_key, true);
    doc.insert(&mut arena, meta_key, meta);

    // Lookups go through a fresh intern of the same text.
    let title_again = names.intern(&mut arena, "title").key();
    let got = doc.get_string(&arena, title_again).unwrap().unwrap();
    assert!(got.eq_str(&arena, "cairn"));
    assert_eq!(doc.get_number(&arena, size_key), Ok(Some(42.0)));

    let got_tags = doc.get_array(&arena, tags_key).unwrap().unwrap();
    assert_eq!(got_tags.len(&arena), 2);
    match got_tags.get(&arena, 1) {
        Ok(Value::Str(s)) => assert_eq!(s.to_string_lossy(&arena), "map"),
        other => panic!("expected a string, got {other:?}"),
    }

    let got_meta = doc.get_object(&arena, meta_key).unwrap().unwrap();
    assert_eq!(got_meta.get_bool(&arena, size_key), Ok(Some(true)));
}

#[test]
fn tag_mismatch_is_an_error_but_wildcard_is_not() {
    let mut arena = Arena::new();
    let store = TaggedStore::create(&mut arena, 4);
    store.insert(&mut arena, Key(1), 2.5);

    let err = store.get_string(&arena, Key(1)).unwrap_err();
    assert_eq!(
        err,
        ArenaError::TypeMismatch {
            key: Key(1),
            expected: Tag::String,
            found: Tag::Number,
        }
    );
    assert!(!err.to_string().is_empty());
    assert_eq!(store.get(&arena, Key(1), Tag::Any), Ok(Some(2.5f64.to_bits())));
    assert_eq!(store.get_any(&arena, Key(1)), Some(2.5f64.to_bits()));
}

proptest! {
    #[test]
    fn contains_key_agrees_with_get(
        inserts in prop::collection::vec((0u64..40, any::<u64>()), 0..80),
        probes in prop::collection::vec(0u64..60, 0..40),
        buckets in 0usize..9,
    ) {
        let mut arena = Arena::new();
        let map = HashMap::<u64>::create(&mut arena, buckets);
        let expected_buckets = map.bucket_count(&arena);
        for &(k, v) in &inserts {
            map.insert(&mut arena, Key(k), v);
        }
        for &k in inserts.iter().map(|(k, _)| k).chain(probes.iter()) {
            prop_assert_eq!(map.contains_key(&arena, Key(k)), map.get(&arena, Key(k)).is_some());
        }
        prop_assert_eq!(map.bucket_count(&arena), expected_buckets);
    }
}

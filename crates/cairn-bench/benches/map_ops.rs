//! Criterion micro-benchmarks for map insert and lookup.

use std::hint::black_box;

use cairn_arena::Arena;
use cairn_bench::{filled_map, filled_store, scrambled_keys};
use cairn_map::{HashMap, Interner};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const KEYS: usize = 4096;

/// Benchmark: checked vs unchecked insert of 4K keys at several bucket counts.
fn bench_map_insert(c: &mut Criterion) {
    let keys = scrambled_keys(KEYS, 42);
    let mut group = c.benchmark_group("map_insert_4k");
    for buckets in [64usize, 1024, 4096] {
        group.bench_with_input(BenchmarkId::new("checked", buckets), &buckets, |b, &n| {
            b.iter(|| {
                let mut arena = Arena::new();
                let map = HashMap::<u64>::create(&mut arena, n);
                for (i, &key) in keys.iter().enumerate() {
                    map.insert(&mut arena, key, i as u64);
                }
                black_box(map.entry_count(&arena));
            });
        });
        group.bench_with_input(BenchmarkId::new("unchecked", buckets), &buckets, |b, &n| {
            b.iter(|| {
                let mut arena = Arena::new();
                let map = filled_map(&mut arena, n, &keys);
                black_box(map.addr());
            });
        });
    }
    group.finish();
}

/// Benchmark: 4K hits and 4K misses against a filled map.
fn bench_map_get(c: &mut Criterion) {
    let keys = scrambled_keys(KEYS, 42);
    let misses = scrambled_keys(KEYS, 43);
    let mut arena = Arena::new();
    let map = filled_map(&mut arena, 1024, &keys);

    c.bench_function("map_get_hit_4k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &key in &keys {
                sum = sum.wrapping_add(map.get(&arena, key).unwrap_or(0));
            }
            black_box(sum);
        });
    });

    c.bench_function("map_get_miss_4k", |b| {
        b.iter(|| {
            let found = misses
                .iter()
                .filter(|&&key| map.contains_key(&arena, key))
                .count();
            black_box(found);
        });
    });
}

/// Benchmark: typed reads from a tagged store.
fn bench_store_get_number(c: &mut Criterion) {
    let keys = scrambled_keys(KEYS, 7);
    let mut arena = Arena::new();
    let store = filled_store(&mut arena, 1024, &keys);

    c.bench_function("store_get_number_4k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for &key in &keys {
                if let Ok(Some(n)) = store.get_number(&arena, key) {
                    total += n;
                }
            }
            black_box(total);
        });
    });
}

/// Benchmark: intern 1K names twice, so half the calls are hits.
fn bench_intern(c: &mut Criterion) {
    let names: Vec<String> = (0..1024).map(|i| format!("field_{i}")).collect();
    c.bench_function("intern_1k_twice", |b| {
        b.iter(|| {
            let mut arena = Arena::new();
            let interner = Interner::create(&mut arena, 256);
            for _ in 0..2 {
                for name in &names {
                    black_box(interner.intern(&mut arena, name));
                }
            }
            black_box(interner.len(&arena));
        });
    });
}

criterion_group!(
    benches,
    bench_map_insert,
    bench_map_get,
    bench_store_get_number,
    bench_intern
);
criterion_main!(benches);

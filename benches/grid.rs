//! Grid page benchmarks.
//!
//! Run with: `cargo bench --bench grid`
//!
//! Measures insert cost (dedup scan, eviction, reposition) and snapshot
//! reads with and without a warm cache.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use gridkit::persist::{encode_codes, parse_codes};
use gridkit::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_COUNT: usize = 28 * 3;
const OPS: u64 = 10_000;

fn template() -> Vec<Item> {
    vec![
        Item::new(TEMPLATE_CODE_0, 48, 48).at(0, 0),
        Item::new(TEMPLATE_CODE_1, 48, 48).at(48, 0),
    ]
}

fn page(max_count: usize) -> GridPage {
    GridPage::new(&template(), LayoutMetrics::new(48 * 7, 4, 0), max_count)
}

/// Codes drawn from a skewed pool so reinserts hit existing members.
fn workload(len: usize, seed: u64) -> Vec<Arc<Item>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let code = if rng.random_bool(0.7) {
                rng.random_range(0..32)
            } else {
                rng.random_range(0..1024)
            };
            Arc::new(Item::new(0x1f600 + code, 48, 48))
        })
        .collect()
}

// ============================================================================
// Inserts
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_insert");
    group.throughput(Throughput::Elements(OPS));
    let items = workload(OPS as usize, 42);

    group.bench_function("front_skewed", |b| {
        b.iter_batched(
            || page(MAX_COUNT),
            |page| {
                for item in &items {
                    black_box(page.insert_recent(Arc::clone(item)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("back_skewed", |b| {
        b.iter_batched(
            || page(MAX_COUNT),
            |page| {
                for item in &items {
                    black_box(page.insert_silent(Arc::clone(item)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ============================================================================
// Snapshot reads
// ============================================================================

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_snapshot");
    let items = workload(MAX_COUNT * 2, 7);

    group.bench_function("cached", |b| {
        let page = page(MAX_COUNT);
        for item in &items {
            page.insert_recent(Arc::clone(item));
        }
        let _ = page.snapshot();
        b.iter(|| black_box(page.snapshot()))
    });

    group.bench_function("rebuild_after_insert", |b| {
        let page = page(MAX_COUNT);
        let mut i = 0usize;
        b.iter(|| {
            page.insert_recent(Arc::clone(&items[i % items.len()]));
            i += 1;
            black_box(page.snapshot())
        })
    });

    group.finish();
}

// ============================================================================
// Persisted format
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let codes: Vec<i32> = (0..MAX_COUNT as i32).map(|c| 0x1f600 + c).collect();
    let encoded = encode_codes(codes.iter().copied());

    c.bench_function("encode_codes", |b| {
        b.iter(|| black_box(encode_codes(codes.iter().copied())))
    });
    c.bench_function("parse_codes", |b| {
        b.iter(|| black_box(parse_codes(&encoded, MalformedTokenPolicy::Skip)))
    });
}

criterion_group!(benches, bench_insert, bench_snapshot, bench_codec);
criterion_main!(benches);

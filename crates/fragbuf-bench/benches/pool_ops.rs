//! Criterion micro-benchmarks for pool allocation, free, and churn.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fragbuf_bench::{churn_sizes, embedded_profile, run_churn, wide_profile};
use fragbuf_core::SlotId;
use fragbuf_pool::ChunkPool;

/// Benchmark: build a 64 KiB pool from config.
fn bench_pool_new_wide(c: &mut Criterion) {
    c.bench_function("pool_new_wide", |b| {
        b.iter(|| {
            let pool: ChunkPool<u8> = ChunkPool::new(wide_profile()).unwrap();
            black_box(pool.capacity());
        });
    });
}

/// Benchmark: allocate and free one four-chunk slot on an empty pool.
fn bench_allocate_free_embedded(c: &mut Criterion) {
    let mut pool: ChunkPool<u8> = ChunkPool::new(embedded_profile()).unwrap();
    c.bench_function("allocate_free_embedded", |b| {
        b.iter(|| {
            let slot = pool.allocate(black_box(512)).unwrap();
            pool.free(slot);
        });
    });
}

/// Benchmark: allocate when most slot ids are taken, so the free-slot scan
/// walks a full chunk map.
fn bench_allocate_crowded_wide(c: &mut Criterion) {
    let mut pool: ChunkPool<u8> = ChunkPool::new(wide_profile()).unwrap();
    let total = pool.num_chunks();
    for _ in 0..total - 1 {
        pool.allocate(1).unwrap();
    }
    c.bench_function("allocate_crowded_wide", |b| {
        b.iter(|| {
            let slot = pool.allocate(black_box(1)).unwrap();
            pool.free(slot);
        });
    });
    black_box(pool.is_slot_used(SlotId(0)));
}

/// Benchmark: 1000 seeded requests against the embedded profile.
fn bench_churn_embedded(c: &mut Criterion) {
    let sizes = churn_sizes(1000, 600, 42);
    c.bench_function("churn_embedded_1k", |b| {
        b.iter(|| {
            let mut pool: ChunkPool<u8> = ChunkPool::new(embedded_profile()).unwrap();
            let report = run_churn(&mut pool, &sizes, 8);
            black_box(report.allocations);
        });
    });
}

/// Benchmark: occupancy snapshot on a fragmented wide pool.
fn bench_stats_wide(c: &mut Criterion) {
    let mut pool: ChunkPool<u8> = ChunkPool::new(wide_profile()).unwrap();
    run_churn(&mut pool, &churn_sizes(2000, 2048, 7), 64);
    c.bench_function("stats_wide", |b| {
        b.iter(|| black_box(pool.stats()));
    });
}

criterion_group!(
    benches,
    bench_pool_new_wide,
    bench_allocate_free_embedded,
    bench_allocate_crowded_wide,
    bench_churn_embedded,
    bench_stats_wide
);
criterion_main!(benches);

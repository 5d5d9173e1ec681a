//! Benchmarks for the merge sort engine against the standard library baseline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seqops_sort::{merge_sort, merge_sort_in_place};

/// Seeded random data so runs are comparable
fn generate_test_data(size: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    let sizes = vec![1_000, 10_000, 100_000];

    for &size in &sizes {
        let data = generate_test_data(size);

        group.bench_with_input(BenchmarkId::new("pure", size), &data, |b, data| {
            b.iter(|| black_box(merge_sort(data)));
        });

        group.bench_with_input(BenchmarkId::new("in_place", size), &data, |b, data| {
            b.iter(|| {
                let mut copy = data.clone();
                merge_sort_in_place(&mut copy);
                black_box(copy)
            });
        });

        // Standard library stable sort as the baseline
        group.bench_with_input(BenchmarkId::new("std_stable", size), &data, |b, data| {
            b.iter(|| {
                let mut copy = data.clone();
                copy.sort();
                black_box(copy)
            });
        });
    }

    group.finish();
}

/// Already-sorted and reverse-sorted inputs stress the merge's branch pattern
fn bench_merge_sort_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort_patterns");

    let size = 10_000usize;
    let sorted: Vec<i64> = (0..size as i64).collect();
    let reversed: Vec<i64> = (0..size as i64).rev().collect();

    group.bench_with_input(BenchmarkId::new("pure", "sorted"), &sorted, |b, data| {
        b.iter(|| black_box(merge_sort(data)));
    });

    group.bench_with_input(BenchmarkId::new("pure", "reversed"), &reversed, |b, data| {
        b.iter(|| black_box(merge_sort(data)));
    });

    group.finish();
}

criterion_group!(benches, bench_merge_sort, bench_merge_sort_patterns);
criterion_main!(benches);

//! Benchmark for the sorting algorithms.
//!
//! Compares the view-based sorts against `slice::sort_unstable`, and measures
//! the cost of sorting through a reversed view.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use sublist::algorithm::{heap_sort, partial_sort, quick_sort, shell_sort};
use sublist::view::{AsSublist, View};

fn random_values(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

// =============================================================================
// Full sorts
// =============================================================================

fn benchmark_sorts(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let values = random_values(size);

        group.bench_with_input(BenchmarkId::new("quick_sort", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut sorted = values.clone();
                quick_sort(&mut sorted.sublist_mut());
                black_box(sorted)
            });
        });

        group.bench_with_input(BenchmarkId::new("heap_sort", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut sorted = values.clone();
                heap_sort(&mut sorted.sublist_mut());
                black_box(sorted)
            });
        });

        group.bench_with_input(BenchmarkId::new("shell_sort", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut sorted = values.clone();
                shell_sort(&mut sorted.sublist_mut());
                black_box(sorted)
            });
        });

        // Standard slice sort
        group.bench_with_input(
            BenchmarkId::new("slice_sort_unstable", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut sorted = values.clone();
                    sorted.sort_unstable();
                    black_box(sorted)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// View overhead
// =============================================================================

fn benchmark_view_overhead(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_view_overhead");
    let size = 10000;
    let values = random_values(size);

    group.bench_function("whole_collection", |bencher| {
        bencher.iter(|| {
            let mut sorted = values.clone();
            quick_sort(&mut sorted.sublist_mut());
            black_box(sorted)
        });
    });

    group.bench_function("reversed", |bencher| {
        bencher.iter(|| {
            let mut sorted = values.clone();
            quick_sort(&mut sorted.sublist_mut().reversed());
            black_box(sorted)
        });
    });

    group.bench_function("nested_window", |bencher| {
        bencher.iter(|| {
            let mut sorted = values.clone();
            let mut window = sorted.sublist_range_mut(size / 4, size / 2).unwrap();
            quick_sort(&mut window);
            black_box(sorted)
        });
    });

    group.finish();
}

// =============================================================================
// Partial sort
// =============================================================================

fn benchmark_partial_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_sort");
    let values = random_values(10000);

    for k in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("partial_sort", k), &k, |bencher, &k| {
            bencher.iter(|| {
                let mut sorted = values.clone();
                partial_sort(&mut sorted.sublist_mut(), black_box(k)).unwrap();
                black_box(sorted)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sorts,
    benchmark_view_overhead,
    benchmark_partial_sort
);
criterion_main!(benches);

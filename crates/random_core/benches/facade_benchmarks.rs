//! Criterion benchmarks for the sampling operations.
//!
//! Compares draws through the thread-local facade against draws on an owned
//! `Randomizer`, and measures how rejection sampling scales as the target
//! interval moves away from the mean.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use random_core::{facade, Randomizer};

/// Benchmark uniform draws through the facade and an owned randomizer.
fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform");

    group.bench_function("facade_number_i32", |b| {
        b.iter(|| facade::number(black_box(1), black_box(100)).unwrap());
    });

    group.bench_function("facade_number_f64", |b| {
        b.iter(|| facade::number(black_box(0.0), black_box(1.0)).unwrap());
    });

    let mut randomizer = Randomizer::from_seed(42);
    group.bench_function("owned_number_i32", |b| {
        b.iter(|| randomizer.number(black_box(1), black_box(100)).unwrap());
    });

    group.bench_function("facade_uuid128", |b| {
        b.iter(facade::uuid128);
    });

    group.finish();
}

/// Benchmark rejection sampling with the interval shifted by `k` standard deviations.
fn bench_rejection(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_number_in");
    let mut randomizer = Randomizer::from_seed(42);

    for shift in [0.0, 1.0, 2.0, 3.0] {
        group.bench_with_input(BenchmarkId::new("shift", shift), &shift, |b, &shift| {
            b.iter(|| {
                randomizer
                    .weighted_number_in(black_box(shift), black_box(shift + 1.0), 0.0, 1.0)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark index operations across sequence lengths.
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    for size in [10, 1_000, 100_000] {
        let sequence: Vec<u32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("uniform", size), &sequence, |b, sequence| {
            b.iter(|| facade::index(black_box(sequence)).unwrap());
        });

        let mean = size as f64 / 2.0;
        let std_dev = size as f64 / 6.0;
        group.bench_with_input(BenchmarkId::new("weighted", size), &sequence, |b, sequence| {
            b.iter(|| facade::weighted_index(black_box(sequence), mean, std_dev).unwrap());
        });

        group.bench_with_input(
            BenchmarkId::new("pick_from_list", size),
            &sequence,
            |b, sequence| {
                b.iter(|| facade::pick_from_list(black_box(sequence)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_uniform, bench_rejection, bench_index);
criterion_main!(benches);

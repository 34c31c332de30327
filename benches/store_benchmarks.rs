//! Experiment store benchmarks
//!
//! - Validated insertion
//! - Per-experiment analysis
//! - Multi-experiment comparison
//! - Report rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lab_ledger::experiment::ExperimentStore;

/// Build a store with `count` experiments of `width` results each
#[allow(clippy::cast_precision_loss)]
fn create_store(count: usize, width: usize) -> ExperimentStore {
    let mut store = ExperimentStore::new();
    for i in 0..count {
        let results = (0..width).map(|j| (i * width + j) as f64 * 0.5).collect();
        let date = format!("{:02}/{:02}/2024", i % 28 + 1, i % 12 + 1);
        store
            .add(format!("exp-{i}"), &date, "Physics", results)
            .unwrap();
    }
    store
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(create_store(count, 8)));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for width in [3, 100, 10_000] {
        let store = create_store(1, width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &store, |b, store| {
            b.iter(|| black_box(store.analyze(0)));
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let store = create_store(1_000, 16);
    let indices: Vec<usize> = (0..store.len()).collect();

    c.bench_function("compare_1000", |b| {
        b.iter(|| black_box(store.compare(black_box(&indices)).unwrap()));
    });
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_report");

    for count in [10, 1_000] {
        let store = create_store(count, 8);
        group.bench_with_input(BenchmarkId::from_parameter(count), &store, |b, store| {
            b.iter(|| black_box(store.generate_report()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_analyze, bench_compare, bench_report);
criterion_main!(benches);

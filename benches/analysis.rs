//! Benchmarks comparing the linear-time operations against quadratic reference versions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_data_analysis::execution::process_large_dataset;
use rust_data_analysis::processing::{filter_and_transform, find_duplicates, mode};

/// Every value appears exactly twice.
fn paired_data(size: usize) -> Vec<i64> {
    let half = (size / 2) as i64;
    (0..half).chain(0..half).collect()
}

/// Repeating pattern with one value (5) appearing twice per cycle.
fn repeated_pattern(size: usize) -> Vec<i64> {
    [1, 2, 3, 4, 5, 5, 6, 7, 8, 9, 10]
        .iter()
        .copied()
        .cycle()
        .take(size)
        .collect()
}

/// Pairwise comparison plus a linear membership check on the output.
fn find_duplicates_pairwise(items: &[i64]) -> Vec<i64> {
    let mut duplicates = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if items[i] == items[j] && !duplicates.contains(&items[i]) {
                duplicates.push(items[i]);
            }
        }
    }
    duplicates
}

/// Recounts every element by rescanning the whole slice.
fn mode_rescan(data: &[i64]) -> Option<i64> {
    let mut best = None;
    let mut best_count = 0;
    for v in data {
        let count = data.iter().filter(|x| *x == v).count();
        if count > best_count {
            best_count = count;
            best = Some(*v);
        }
    }
    best
}

/// Rebuilds the output string for every character.
fn filter_and_transform_rebuild(data: &[i64], threshold: f64) -> Vec<String> {
    let mut out = Vec::new();
    for v in data {
        if *v as f64 > threshold {
            let mut transformed = String::new();
            for ch in v.to_string().chars() {
                transformed = format!("{transformed}{}", ch.to_uppercase());
            }
            out.push(transformed);
        }
    }
    out
}

fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_duplicates");
    for size in [100, 1_000, 2_000] {
        let data = paired_data(size);
        group.bench_with_input(BenchmarkId::new("hash_set", size), &data, |b, data| {
            b.iter(|| black_box(find_duplicates(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("pairwise", size), &data, |b, data| {
            b.iter(|| black_box(find_duplicates_pairwise(black_box(data))))
        });
    }
    group.finish();
}

fn bench_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode");
    for size in [1_000, 5_000] {
        let data = repeated_pattern(size);
        group.bench_with_input(BenchmarkId::new("counting_table", size), &data, |b, data| {
            b.iter(|| black_box(mode(black_box(data))))
        });
        group.bench_with_input(BenchmarkId::new("rescan", size), &data, |b, data| {
            b.iter(|| black_box(mode_rescan(black_box(data))))
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_transform");
    let data: Vec<i64> = (0..10_000).map(|i| i * 1_000_003).collect();
    group.bench_function("bulk_uppercase", |b| {
        b.iter(|| black_box(filter_and_transform(black_box(&data), 0.0)))
    });
    group.bench_function("rebuild_per_char", |b| {
        b.iter(|| black_box(filter_and_transform_rebuild(black_box(&data), 0.0)))
    });
    group.finish();
}

fn bench_all_operations(c: &mut Criterion) {
    let data = repeated_pattern(11_000);
    c.bench_function("process_large_dataset/all", |b| {
        b.iter(|| {
            black_box(process_large_dataset(
                black_box(&data),
                ["duplicates", "statistics", "filter"],
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_duplicates,
    bench_mode,
    bench_filter,
    bench_all_operations
);
criterion_main!(benches);

//! Benchmarks for percentile and quartile computation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formula_quantile::{percentile, quartiles, QuartileMethod};

/// Generate test data with specific patterns
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| (i as f64 * 0.1).sin() * 100.0)
        .collect()
}

fn bench_percentile(c: &mut Criterion) {
    let mut group = c.benchmark_group("percentile");

    for &size in &[100, 1_000, 10_000] {
        let data = generate_test_data(size);
        group.bench_with_input(BenchmarkId::new("p90", size), &data, |b, data| {
            b.iter(|| black_box(percentile(data, 90.0)))
        });
    }

    group.finish();
}

fn bench_quartiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("quartiles");

    for &size in &[100, 1_000, 10_000] {
        let data = generate_test_data(size);
        for method in [QuartileMethod::Exclusive, QuartileMethod::Inclusive] {
            group.bench_with_input(
                BenchmarkId::new(method.name(), size),
                &data,
                |b, data| b.iter(|| black_box(quartiles(data, method))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_percentile, bench_quartiles);
criterion_main!(benches);

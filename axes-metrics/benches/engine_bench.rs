use criterion::{criterion_group, criterion_main, Criterion};

use axes_core::config::RetentionConfig;
use axes_metrics::{compute_retention_metrics, population_stability_index, AxesEngine};
use test_fixtures::{balanced_frame, normal_values};

fn bench_compute_axes(c: &mut Criterion) {
    let engine = AxesEngine::default();
    let frame = balanced_frame(1_000, 2.0, 42);

    c.bench_function("compute_axes_1k_rows", |b| {
        b.iter(|| engine.compute_axes(&frame, "f1").unwrap());
    });
    c.bench_function("compute_axes_parallel_1k_rows", |b| {
        b.iter(|| engine.compute_axes_parallel(&frame, "f1").unwrap());
    });
}

fn bench_psi(c: &mut Criterion) {
    let expected = normal_values(10_000, 0.0, 1.0, 1);
    let actual = normal_values(10_000, 0.3, 1.2, 2);

    c.bench_function("psi_10k_values", |b| {
        b.iter(|| population_stability_index(&expected, &actual, 10));
    });
}

fn bench_retention(c: &mut Criterion) {
    let base = balanced_frame(500, 2.0, 3);
    let shift = balanced_frame(500, 1.0, 4);
    let config = RetentionConfig {
        n_estimators: 50,
        ..RetentionConfig::default()
    };

    let mut group = c.benchmark_group("retention");
    group.sample_size(10);
    group.bench_function("forest_50_trees_500_rows", |b| {
        b.iter(|| compute_retention_metrics(&base, &shift, &config).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_compute_axes, bench_psi, bench_retention);
criterion_main!(benches);

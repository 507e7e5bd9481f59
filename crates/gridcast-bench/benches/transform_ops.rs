//! Criterion micro-benchmarks for the image to grid transforms.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gridcast_bench::{reference_image, stress_image};
use gridcast_core::Grid;
use gridcast_transform::{resize_area, to_collision_grid, to_objective_grid, Grayscale};

/// Benchmark: collision transform of a 640x480 image at scalar 0.5.
fn bench_collision_reference(c: &mut Criterion) {
    let img = reference_image(42);

    c.bench_function("collision_reference_640x480", |b| {
        b.iter(|| {
            let grid = to_collision_grid(&img, 0.5).unwrap();
            black_box(&grid);
        });
    });
}

/// Benchmark: objective transform of a 640x480 image at scalar 0.5.
fn bench_objective_reference(c: &mut Criterion) {
    let img = reference_image(42);

    c.bench_function("objective_reference_640x480", |b| {
        b.iter(|| {
            let grid = to_objective_grid(&img, 0.5).unwrap();
            black_box(&grid);
        });
    });
}

/// Benchmark: objective transform of a 2048x2048 image at scalar 0.5.
fn bench_objective_stress(c: &mut Criterion) {
    let img = stress_image(42);

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("objective_stress_2048", |b| {
        b.iter(|| {
            let grid = to_objective_grid(&img, 0.5).unwrap();
            black_box(&grid);
        });
    });
    group.finish();
}

/// Benchmark: area resize alone, non-integer factor (640x480 → 213x160).
fn bench_resize_fractional(c: &mut Criterion) {
    let gray = reference_image(7).to_gray();
    let src: Grid<f64> = gray.map(|&v| f64::from(v));

    c.bench_function("resize_area_fractional", |b| {
        b.iter(|| {
            let out = resize_area(&src, 160, 213);
            black_box(&out);
        });
    });
}

criterion_group!(
    benches,
    bench_collision_reference,
    bench_objective_reference,
    bench_objective_stress,
    bench_resize_fractional
);
criterion_main!(benches);

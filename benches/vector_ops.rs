//! Micro-benchmarks for the core vector operations across dimensions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use norma::{AngleUnit, Vector};

fn sample_vector(dimension: usize, offset: i64) -> Vector {
    Vector::from_integers((0..dimension as i64).map(|i| i + offset)).unwrap()
}

fn bench_vector_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_operations");

    for &dimension in &[2usize, 16, 64, 256] {
        let a = sample_vector(dimension, 1);
        let b = sample_vector(dimension, 3);

        group.bench_with_input(
            BenchmarkId::new("magnitude", dimension),
            &dimension,
            |bench, _| bench.iter(|| black_box(&a).magnitude()),
        );

        group.bench_with_input(BenchmarkId::new("dot", dimension), &dimension, |bench, _| {
            bench.iter(|| black_box(&a).dot(black_box(&b)).unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("normalized", dimension),
            &dimension,
            |bench, _| bench.iter(|| black_box(&a).normalized().unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("angle_with", dimension),
            &dimension,
            |bench, _| {
                bench.iter(|| {
                    black_box(&a)
                        .angle_with(black_box(&b), AngleUnit::Radians)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_vector_operations);
criterion_main!(benches);

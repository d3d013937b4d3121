//! Criterion benchmarks for the MRFO optimizer.
//!
//! Uses the Sphere and Ackley benchmark functions to measure pure
//! algorithm overhead across population sizes and dimensionalities.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mrfo::functions::{Ackley, Sphere};
use mrfo::{MrfoConfig, MrfoRunner};

fn bench_mrfo_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("mrfo_sphere");
    group.sample_size(10);

    for (dim, pop, iters) in [(2usize, 30usize, 100usize), (10, 50, 50), (50, 100, 20)] {
        let config = MrfoConfig::new(pop, dim, iters, -10.0, 10.0)
            .unwrap()
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_t{}", dim, pop, iters), dim),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = MrfoRunner::run(Sphere, black_box(config)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_mrfo_ackley(c: &mut Criterion) {
    let mut group = c.benchmark_group("mrfo_ackley");
    group.sample_size(10);

    for &dim in &[2, 10, 30] {
        let config = MrfoConfig::new(30, dim, 100, -10.0, 10.0)
            .unwrap()
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &config, |b, config| {
            b.iter(|| {
                let result = MrfoRunner::run(Ackley::default(), black_box(config)).unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mrfo_sphere, bench_mrfo_ackley);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use tombola::{draw, sample_distinct, sample_without_replacement};

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");

    // The counter scan dominates for large ranges.
    let sizes = [1_000, 10_000, 100_000];
    let k = 100;

    for &size in &sizes {
        group.bench_function(format!("throws_n{}_k{}", size, k), |b| {
            b.iter(|| {
                let picked =
                    sample_distinct(0, black_box(size), black_box(k)).expect("range ok");
                black_box(picked);
            })
        });
    }
    group.finish();
}

fn bench_without_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("without_replacement");

    let sizes = [1_000, 10_000, 100_000];
    let k = 100;

    for &size in &sizes {
        group.bench_function(format!("exact_n{}_k{}", size, k), |b| {
            b.iter(|| {
                let picked = sample_without_replacement(0, black_box(size), black_box(k))
                    .expect("range ok");
                black_box(picked);
            })
        });
    }
    group.finish();
}

fn bench_scalar_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    group.bench_function("uniform_int_10k", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            let mut acc = 0usize;
            for _ in 0..10_000 {
                acc += draw::uniform_int(black_box(1_000), &mut rng);
            }
            black_box(acc);
        })
    });

    group.bench_function("standard_normal_10k", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            let mut acc = 0.0f64;
            for _ in 0..10_000 {
                acc += draw::standard_normal(&mut rng);
            }
            black_box(acc);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_distinct,
    bench_without_replacement,
    bench_scalar_draws
);
criterion_main!(benches);

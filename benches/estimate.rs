use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use montepi::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for n in [1_000_usize, 100_000] {
        group.bench_function(format!("n={n}"), |b| {
            let mut rng = Xoshiro256Plus::seed_from_u64(1);
            b.iter(|| generate(n, &mut rng))
        });
    }
    group.finish();
}

fn bench_estimate(c: &mut Criterion) {
    c.bench_function("estimate_100k", |b| {
        let mut rng = Xoshiro256Plus::seed_from_u64(2);
        b.iter_batched(
            || generate(100_000, &mut rng),
            |points| estimate(&points),
            BatchSize::LargeInput,
        )
    });
}

fn bench_stream_vs_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_vs_set");
    group.bench_function("point_set", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| estimate(&generate(10_000, &mut rng)))
    });
    group.bench_function("sample_stream", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let inside = UnitSquare
                .sample_stream(&mut rng)
                .take(10_000)
                .filter(Point::in_quarter_disk)
                .count();
            4.0 * inside as f64 / 10_000.0
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_estimate,
    bench_stream_vs_set
);
criterion_main!(benches);

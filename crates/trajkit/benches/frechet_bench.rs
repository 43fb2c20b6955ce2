//! Criterion benchmarks for the strong Fréchet decision and search.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use trajkit::geom::PointD;
use trajkit::similarity::{SearchMode, StrongFrechet};

type P2 = PointD<2>;

fn noisy_line(n: usize, amplitude: f64, seed: u64) -> Vec<P2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| P2::new(i as f64, rng.gen_range(-amplitude..amplitude)))
        .collect()
}

fn bench_strong_frechet(c: &mut Criterion) {
    let mut group = c.benchmark_group("strong_frechet");
    for &n in &[20usize, 50, 100, 200] {
        let a = noisy_line(n, 0.3, 7);
        let b = noisy_line(n, 0.3, 8);
        let sf = StrongFrechet::default();
        group.bench_with_input(BenchmarkId::new("decide", n), &n, |bench, _| {
            bench.iter(|| sf.decide(&a, &b, 1.0))
        });
        group.bench_with_input(BenchmarkId::new("double_and_search", n), &n, |bench, _| {
            bench.iter(|| sf.distance(&a, &b).unwrap())
        });
        let bounded = StrongFrechet::new(SearchMode::BisectionSearch).with_upper_bound(5.0);
        group.bench_with_input(BenchmarkId::new("bisection", n), &n, |bench, _| {
            bench.iter(|| bounded.distance(&a, &b).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strong_frechet);
criterion_main!(benches);

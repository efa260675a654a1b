use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use genopt::{
    evolution::{GeneticOptimization, GeneticOptimizationParams},
    rng::RandomNumberGenerator,
    strategy::{Domain, NQueensStrategy, OneVarStrategy},
};

fn bench_nqueens(c: &mut Criterion) {
    let mut group = c.benchmark_group("nqueens");
    group.sample_size(10);

    for n in [6, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| {
                let strategy =
                    NQueensStrategy::new(n, RandomNumberGenerator::from_seed(42)).unwrap();
                let mut params = GeneticOptimizationParams::new(500, 200, 0.05, 0.01).unwrap();
                params.set_target_value(0.0).unwrap();
                let history = GeneticOptimization::new(strategy, params)
                    .optimize()
                    .unwrap();
                black_box(history)
            })
        });
    }

    group.finish();
}

fn bench_one_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_var");
    group.sample_size(10);

    for generations in [10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            generations,
            |b, &generations| {
                b.iter(|| {
                    let strategy = OneVarStrategy::minimize(
                        Domain::new(-10.0, 10.0).unwrap(),
                        |x: f64| x.powi(2),
                        RandomNumberGenerator::from_seed(123),
                    );
                    let params =
                        GeneticOptimizationParams::new(1000, generations, 0.15, 0.01).unwrap();
                    let history = GeneticOptimization::new(strategy, params)
                        .optimize()
                        .unwrap();
                    black_box(history)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_nqueens, bench_one_var);
criterion_main!(benches);

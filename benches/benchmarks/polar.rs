use criterion::{BatchSize, Criterion, criterion_group};
use polarshape::{FixSeries, Polar, cartesian::Planar};
use rand::Rng;

type Sample = [f64; 365];

fn random_series() -> Vec<f64> {
    let mut rng = rand::rng();
    rng.random::<Sample>().to_vec()
}

fn random_operands() -> [Vec<f64>; 2] {
    [random_series(), random_series()]
}

pub fn long_series(criterion: &mut Criterion) {
    let polar: Polar<Planar, FixSeries> = Polar::default();
    let mut group = criterion.benchmark_group("long series");

    group.bench_function("features", |b| {
        b.iter_batched(
            random_series,
            |series| {
                let _ = polar.features(&series);
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("distance", |b| {
        b.iter_batched(
            random_operands,
            |[lhs, rhs]| {
                let _ = polar.distance(&lhs, &rhs);
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, long_series);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Rosenbrock Function
/// The Rosenbrock function is defined as follows:
///
/// $f(x) = (1 - x_1)^2 + 100 (x_2 - x_1^2)^2$
///
/// The benchmark compares one optimizer-iteration-shaped workload, a fresh point
/// followed by several mixed reads of the three quantities, evaluated through the
/// cache and by direct recomputation of the underlying functions.
use evalcache::cache::CachedObjective;
use evalcache::functions::{rosenbrock, rosenbrock_gradient, rosenbrock_hessian};
use evalcache::objective::ObjectiveFunction;
use ndarray::{array, Array1};

fn cached_queries(objective: &mut CachedObjective, point: &Array1<f64>) -> f64 {
    objective.set_point(point.clone());
    let mut acc = 0.0;
    for _ in 0..10 {
        acc += objective.value().unwrap();
    }
    acc += objective.gradient().unwrap()[0];
    acc += objective.hessian().unwrap()[[0, 0]];
    acc
}

fn direct_queries(point: &Array1<f64>) -> f64 {
    let mut acc = 0.0;
    for _ in 0..10 {
        acc += rosenbrock(point).unwrap();
    }
    acc += rosenbrock_gradient(point).unwrap()[0];
    acc += rosenbrock_hessian(point).unwrap()[[0, 0]];
    acc
}

fn run_rosenbrock_queries(c: &mut Criterion) {
    let point = array![-1.2, 1.0];

    let mut objective = CachedObjective::new(rosenbrock)
        .with_gradient(rosenbrock_gradient)
        .with_hessian(rosenbrock_hessian);

    c.bench_function("rosenbrock_cached_queries", |b| {
        b.iter(|| black_box(cached_queries(&mut objective, &point)))
    });

    c.bench_function("rosenbrock_direct_queries", |b| {
        b.iter(|| black_box(direct_queries(&point)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(500);
    targets = run_rosenbrock_queries
}
criterion_main!(benches);

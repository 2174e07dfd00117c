/// Rosenbrock Function
/// The Rosenbrock function is defined as follows:
///
/// $f(x) = (1 - x_1)^2 + 100 (x_2 - x_1^2)^2$
///
/// The function has one global minimum at $f(1, 1) = 0$, lying inside a long,
/// narrow, parabolic valley. This example wires its value, gradient and hessian
/// into a cached objective, queries all three quantities at the classic starting
/// point (-1.2, 1.0) and then drives a fixed-step descent loop in which every
/// iteration replaces the evaluation point and reads the gradient once.
///
/// References:
///
/// Molga, M., & Smutnicki, C. Test functions for optimization needs (April 3, 2005), pp. 8-9. Retrieved January 2025, from https://robertmarks.org/Classes/ENGR5358/Papers/functions.pdf
use evalcache::cache::CachedObjective;
use evalcache::functions::{rosenbrock, rosenbrock_gradient, rosenbrock_hessian};
use evalcache::objective::ObjectiveFunction;
use evalcache::types::EvaluationError;
use ndarray::array;

fn main() -> Result<(), EvaluationError> {
    let mut objective = CachedObjective::new(rosenbrock)
        .with_gradient(rosenbrock_gradient)
        .with_hessian(rosenbrock_hessian);

    objective.set_point(array![-1.2, 1.0]);

    println!("f(-1.2, 1.0) = {:.6}", objective.value()?);
    println!("gradient     = {:.6}", objective.gradient()?);
    println!("hessian      =\n{:.6}", objective.hessian()?);
    println!("status       = {}", objective.status());

    // Every cached quantity is already fresh here, so these reads hit the cache
    let value = objective.value()?;
    println!("re-read      = {:.6} (cache hit)", value);

    let step_size: f64 = 1e-3;
    let iterations: usize = 2000;

    let mut point = array![-1.2, 1.0];
    for _ in 0..iterations {
        objective.set_point(point.clone());
        let gradient = objective.gradient()?.clone();
        point = &point - &(gradient * step_size);
    }

    objective.set_point(point.clone());
    println!(
        "after {} fixed steps: f({:.4}, {:.4}) = {:.6}",
        iterations,
        point[0],
        point[1],
        objective.value()?
    );

    Ok(())
}

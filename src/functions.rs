//! # Test functions module
//!
//! This module contains concrete objective functions with analytic derivatives,
//! matching the delegate signatures so they can be injected into a
//! [`CachedObjective`](crate::cache::CachedObjective) directly.

use crate::types::EvaluationError;
use ndarray::{array, Array1, Array2};

/// Rosenbrock Function
/// The Rosenbrock function is defined as follows:
///
/// $f(x) = (1 - x_1)^2 + 100 (x_2 - x_1^2)^2$
///
/// The function is usually evaluated on the domain $x_1 \in [-2.048, 2.048]$, $x_2 \in [-2.048, 2.048]$.
/// The function has one global minimum at $f(1, 1) = 0$, lying inside a long, narrow, parabolic valley.
/// The function is continuous, differentiable, unimodal and non-convex.
///
/// References:
///
/// Molga, M., & Smutnicki, C. Test functions for optimization needs (April 3, 2005), pp. 8-9. Retrieved January 2025, from https://robertmarks.org/Classes/ENGR5358/Papers/functions.pdf
pub fn rosenbrock(x: &Array1<f64>) -> Result<f64, EvaluationError> {
    check_dimension(x)?;
    Ok((1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0].powi(2)).powi(2))
}

/// Gradient of the Rosenbrock function at point x
// Calculated analytically, reference didn't provide gradient
pub fn rosenbrock_gradient(x: &Array1<f64>) -> Result<Array1<f64>, EvaluationError> {
    check_dimension(x)?;
    Ok(array![
        -2.0 * (1.0 - x[0]) - 400.0 * x[0] * (x[1] - x[0].powi(2)),
        200.0 * (x[1] - x[0].powi(2))
    ])
}

/// Hessian of the Rosenbrock function at point x
// Calculated analytically, reference didn't provide hessian
pub fn rosenbrock_hessian(x: &Array1<f64>) -> Result<Array2<f64>, EvaluationError> {
    check_dimension(x)?;
    Ok(array![
        [
            2.0 - 400.0 * x[1] + 1200.0 * x[0].powi(2),
            -400.0 * x[0]
        ],
        [-400.0 * x[0], 200.0]
    ])
}

fn check_dimension(x: &Array1<f64>) -> Result<(), EvaluationError> {
    if x.len() != 2 {
        return Err(EvaluationError::InvalidInput(format!(
            "the Rosenbrock function is two-dimensional, got a point of dimension {}",
            x.len()
        )));
    }
    Ok(())
}

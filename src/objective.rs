//! # Objective function trait module
//!
//! This module contains the `ObjectiveFunction` trait, which defines the contract an
//! optimization loop sees: the current evaluation point plus lazily computed value,
//! gradient and Hessian, together with capability queries for the optional derivatives.
//!
//! ## Example
//! ```rust
//! use evalcache::cache::CachedObjective;
//! use evalcache::objective::ObjectiveFunction;
//! use evalcache::types::EvaluationError;
//! use ndarray::{array, Array1};
//!
//! /// One fixed-size descent step over any objective implementation
//! fn descent_step<O: ObjectiveFunction>(
//!     objective: &mut O,
//!     step_size: f64,
//! ) -> Result<Array1<f64>, EvaluationError> {
//!     let gradient = objective.gradient()?.clone();
//!     let point = objective.point().ok_or(EvaluationError::PointNotSet)?;
//!     Ok(point - &(gradient * step_size))
//! }
//!
//! let mut objective = CachedObjective::new(|x: &Array1<f64>| Ok(x.dot(x)))
//!     .with_gradient(|x: &Array1<f64>| Ok(x * 2.0));
//!
//! objective.set_point(array![3.0, 4.0]);
//! assert_eq!(objective.value().unwrap(), 25.0);
//!
//! let next = descent_step(&mut objective, 0.5).unwrap();
//! assert_eq!(next, array![0.0, 0.0]);
//! ```

use crate::types::EvaluationError;
use ndarray::{Array1, Array2};

/// Trait for objective functions evaluated at a current point
///
/// This trait defines the methods an optimization loop uses to query the objective:
/// set the evaluation point once per iteration, then read whichever of value,
/// gradient and Hessian the current algorithm step requires. The accessors take
/// `&mut self` because a read may compute and store the quantity on first use.
pub trait ObjectiveFunction {
    /// Current evaluation point, or `None` if no point has been set yet
    ///
    /// Pure query, no side effect.
    fn point(&self) -> Option<&Array1<f64>>;

    /// Replace the current evaluation point
    ///
    /// Replacement is wholesale and unconditional: every cached quantity becomes
    /// stale, even when the new point is numerically identical to the old one.
    fn set_point(&mut self, point: Array1<f64>);

    /// Objective value at the current point (`f64`)
    ///
    /// Computed on first read after a point replacement, then returned from the
    /// cache on every further read at the same point.
    fn value(&mut self) -> Result<f64, EvaluationError>;

    /// Gradient of the objective at the current point (`Array1<f64>`)
    ///
    /// Same caching contract as [`value`](ObjectiveFunction::value). Fails with
    /// [`EvaluationError::GradientNotSupported`] if no gradient function was
    /// supplied at construction.
    fn gradient(&mut self) -> Result<&Array1<f64>, EvaluationError>;

    /// Hessian of the objective at the current point (`Array2<f64>`)
    ///
    /// Same caching contract as [`value`](ObjectiveFunction::value). Fails with
    /// [`EvaluationError::HessianNotSupported`] if no hessian function was
    /// supplied at construction.
    fn hessian(&mut self) -> Result<&Array2<f64>, EvaluationError>;

    /// True iff a gradient function was supplied at construction
    ///
    /// Pure capability query, never changes over the lifetime of the objective.
    fn gradient_supported(&self) -> bool;

    /// True iff a hessian function was supplied at construction
    ///
    /// Pure capability query, never changes over the lifetime of the objective.
    fn hessian_supported(&self) -> bool;
}

//! # Evaluation cache module
//!
//! This module contains the implementation of the lazily memoizing objective function.
//! `CachedObjective` composes three externally supplied computations, one per quantity,
//! and evaluates each of them at most once per evaluation point. Replacing the point
//! marks every cached quantity stale at once.
//!
//! ## Example
//! ```rust
//! use evalcache::cache::CachedObjective;
//! use evalcache::functions::{rosenbrock, rosenbrock_gradient, rosenbrock_hessian};
//! use evalcache::objective::ObjectiveFunction;
//! use ndarray::array;
//!
//! let mut objective = CachedObjective::new(rosenbrock)
//!     .with_gradient(rosenbrock_gradient)
//!     .with_hessian(rosenbrock_hessian);
//!
//! objective.set_point(array![1.0, 1.0]);
//! assert_eq!(objective.value().unwrap(), 0.0);
//! assert_eq!(objective.hessian().unwrap()[[0, 0]], 802.0);
//! ```

use crate::objective::ObjectiveFunction;
use crate::types::{EvaluationError, EvaluationStatus, GradientFn, HessianFn, ValueFn};
use ndarray::{Array1, Array2};

/// # Cached objective function
///
/// This struct holds the current evaluation point, the three injected computations
/// (value required, gradient and Hessian optional) and the backing storage for the
/// cached quantities, gated by an [`EvaluationStatus`].
///
/// Each accessor follows the same check-compute-cache-return pattern: if the flag
/// for the quantity is unset, call the injected computation with the current point,
/// store the result and set the flag; otherwise return the stored result untouched.
/// There is no cross-quantity dependency. A failing computation propagates to the
/// caller and leaves its flag unset, so the next read at the same point computes
/// again.
///
/// The struct is single-threaded: accessors either return the cached quantity
/// immediately or perform a direct, blocking call into the injected computation.
/// Use one instance per evaluation context.
pub struct CachedObjective {
    value_fn: ValueFn,
    gradient_fn: Option<GradientFn>,
    hessian_fn: Option<HessianFn>,

    point: Option<Array1<f64>>,

    // Stale storage stays in place behind cleared flags and is never read
    // while its flag is unset.
    value: f64,
    gradient: Array1<f64>,
    hessian: Array2<f64>,

    status: EvaluationStatus,
}

impl CachedObjective {
    /// Create a new CachedObjective from the value computation alone
    ///
    /// The resulting objective supports neither gradient nor Hessian reads until
    /// the corresponding computation is supplied via
    /// [`with_gradient`](CachedObjective::with_gradient) /
    /// [`with_hessian`](CachedObjective::with_hessian).
    pub fn new<F>(value_fn: F) -> Self
    where
        F: Fn(&Array1<f64>) -> Result<f64, EvaluationError> + 'static,
    {
        Self {
            value_fn: Box::new(value_fn),
            gradient_fn: None,
            hessian_fn: None,
            point: None,
            value: f64::NAN,
            gradient: Array1::zeros(0),
            hessian: Array2::zeros((0, 0)),
            status: EvaluationStatus::default(),
        }
    }

    /// Supply the gradient computation
    pub fn with_gradient<G>(mut self, gradient_fn: G) -> Self
    where
        G: Fn(&Array1<f64>) -> Result<Array1<f64>, EvaluationError> + 'static,
    {
        self.gradient_fn = Some(Box::new(gradient_fn));
        self
    }

    /// Supply the hessian computation
    pub fn with_hessian<H>(mut self, hessian_fn: H) -> Self
    where
        H: Fn(&Array1<f64>) -> Result<Array2<f64>, EvaluationError> + 'static,
    {
        self.hessian_fn = Some(Box::new(hessian_fn));
        self
    }

    /// Freshness flags of the three cached quantities for the current point
    pub fn status(&self) -> EvaluationStatus {
        self.status
    }
}

impl ObjectiveFunction for CachedObjective {
    fn point(&self) -> Option<&Array1<f64>> {
        self.point.as_ref()
    }

    fn set_point(&mut self, point: Array1<f64>) {
        // Unconditional: no equality check against the previous point, so a
        // numerically identical point still starts a fresh evaluation epoch.
        self.point = Some(point);
        self.status.clear();
    }

    fn value(&mut self) -> Result<f64, EvaluationError> {
        if !self.status.value {
            let point = self.point.as_ref().ok_or(EvaluationError::PointNotSet)?;
            self.value = (self.value_fn)(point)?;
            self.status.value = true;
        }
        Ok(self.value)
    }

    fn gradient(&mut self) -> Result<&Array1<f64>, EvaluationError> {
        if !self.status.gradient {
            // Capability before point: an unsupported read never invokes any
            // injected function, whatever the point state.
            let gradient_fn = self
                .gradient_fn
                .as_ref()
                .ok_or(EvaluationError::GradientNotSupported)?;
            let point = self.point.as_ref().ok_or(EvaluationError::PointNotSet)?;
            self.gradient = gradient_fn(point)?;
            self.status.gradient = true;
        }
        Ok(&self.gradient)
    }

    fn hessian(&mut self) -> Result<&Array2<f64>, EvaluationError> {
        // The Hessian caches under its own flag, independent of the gradient's.
        if !self.status.hessian {
            let hessian_fn = self
                .hessian_fn
                .as_ref()
                .ok_or(EvaluationError::HessianNotSupported)?;
            let point = self.point.as_ref().ok_or(EvaluationError::PointNotSet)?;
            self.hessian = hessian_fn(point)?;
            self.status.hessian = true;
        }
        Ok(&self.hessian)
    }

    fn gradient_supported(&self) -> bool {
        self.gradient_fn.is_some()
    }

    fn hessian_supported(&self) -> bool {
        self.hessian_fn.is_some()
    }
}

//! # Types module
//!
//! This module contains the shared types for objective function evaluation:
//! the delegate types for the injected computations, the per-quantity
//! freshness flags, and the error type surfaced by evaluation.

use ndarray::{Array1, Array2};
use std::fmt;
use thiserror::Error;

/// Injected computation of the objective value at a point
pub type ValueFn = Box<dyn Fn(&Array1<f64>) -> Result<f64, EvaluationError>>;

/// Injected computation of the gradient at a point
pub type GradientFn = Box<dyn Fn(&Array1<f64>) -> Result<Array1<f64>, EvaluationError>>;

/// Injected computation of the Hessian at a point
pub type HessianFn = Box<dyn Fn(&Array1<f64>) -> Result<Array2<f64>, EvaluationError>>;

#[derive(Debug, Error)]
/// Error type for objective function, gradient and hessian evaluation
pub enum EvaluationError {
    /// Error when a quantity is read before any evaluation point was set
    #[error("No evaluation point has been set.")]
    PointNotSet,

    /// Error when the gradient is requested but no gradient function was supplied
    #[error("Gradient requested but no gradient function was supplied.")]
    GradientNotSupported,

    /// Error when the hessian is requested but no hessian function was supplied
    #[error("Hessian requested but no hessian function was supplied.")]
    HessianNotSupported,

    /// Error when the input is invalid
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    /// Error when dividing by zero
    #[error("Division by zero found.")]
    DivisionByZero,

    /// Error when having a negative square root
    #[error("Negative square root found.")]
    NegativeSqrt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-quantity freshness flags for a cached evaluation
///
/// One independent flag per cached quantity. All flags are cleared together
/// whenever the evaluation point is replaced; a flag is set only as a side
/// effect of computing and storing its quantity for the current point.
pub struct EvaluationStatus {
    /// The cached objective value is valid for the current point
    pub value: bool,

    /// The cached gradient is valid for the current point
    pub gradient: bool,

    /// The cached Hessian is valid for the current point
    pub hessian: bool,
}

impl EvaluationStatus {
    /// Mark every quantity stale
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True if no quantity is cached for the current point
    pub fn is_clear(&self) -> bool {
        !self.value && !self.gradient && !self.hessian
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = |fresh: bool| if fresh { "fresh" } else { "stale" };
        write!(
            f,
            "value: {}, gradient: {}, hessian: {}",
            state(self.value),
            state(self.gradient),
            state(self.hessian)
        )
    }
}

#[cfg(test)]
mod tests_types {
    use super::*;

    #[test]
    /// Test that the default status is fully stale
    fn test_evaluation_status_default() {
        let status = EvaluationStatus::default();
        assert!(!status.value);
        assert!(!status.gradient);
        assert!(!status.hessian);
        assert!(status.is_clear());
    }

    #[test]
    /// Test clearing a partially fresh status
    fn test_evaluation_status_clear() {
        let mut status = EvaluationStatus {
            value: true,
            gradient: false,
            hessian: true,
        };
        assert!(!status.is_clear());

        status.clear();
        assert_eq!(status, EvaluationStatus::default());
        assert!(status.is_clear());
    }

    #[test]
    /// Test the Display trait for EvaluationStatus
    fn test_evaluation_status_display() {
        let status = EvaluationStatus {
            value: true,
            gradient: false,
            hessian: false,
        };

        let display_output: String = format!("{}", status);
        assert_eq!(
            display_output,
            "value: fresh, gradient: stale, hessian: stale"
        );
    }
}

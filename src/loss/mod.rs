//! Optimization objectives.
//!
//! The optimizer is generic over a [`CostFunction`] so the objective can be
//! swapped (or mocked in tests) without touching the descent loop. The only
//! objective shipped is [`SquaredError`], the classical least-squares cost.

use crate::backend::{Backend, Tensor1D, Tensor2D};

/// A cost (objective) evaluated against the normalized feature matrix.
///
/// Implementations must be pure: no side effects and no mutation of inputs.
pub trait CostFunction<B: Backend> {
    /// Cost of predicting `x · theta` against targets `y`.
    fn cost(&self, x: &Tensor2D<B>, theta: &Tensor1D<B>, y: &Tensor1D<B>) -> f64;
}

/// Mean-squared-error cost in the `1/(2m)` form:
///
/// ```text
/// cost = sum((X·theta − y)²) / (2m)
/// ```
///
/// The `1/(2m)` scaling makes the gradient exactly `(1/m)·Xᵀ·(X·theta − y)`,
/// which is what the descent loop computes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquaredError;

impl<B: Backend> CostFunction<B> for SquaredError {
    fn cost(&self, x: &Tensor2D<B>, theta: &Tensor1D<B>, y: &Tensor1D<B>) -> f64 {
        let m = y.len();
        let residual = x.dot(theta).sub(y);
        residual.dot(&residual) / (2.0 * m as f64)
    }
}

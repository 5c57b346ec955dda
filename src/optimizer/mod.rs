//! Batch gradient descent with an adaptive (halving) learning rate.
//!
//! [`GradientDescent`] owns the full optimization loop: it normalizes the raw
//! feature matrix, runs batch updates until the cost reaches exactly zero or
//! the iteration cap is exhausted, and backs off the learning rate whenever a
//! step overshoots. The loop is synchronous and CPU-bound; `run` returns only
//! when optimization is complete.
//!
//! There is deliberately no convergence-tolerance exit and no lower bound on
//! `alpha`: the iteration cap is the sole termination guarantee besides an
//! exact-zero cost, so callers must pick `max_iters` conservatively.

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::loss::CostFunction;
use crate::preprocessing::{normalize_features, NormalizedFeatures};

/// Outcome of one optimization run.
///
/// Produced once per [`GradientDescent::run`] call; a later run replaces the
/// whole result, never merges into it. The normalization statistics travel
/// with the parameters because predictions must standardize new inputs with
/// the training-time `mean`/`std`.
#[derive(Clone, Debug)]
pub struct FitResult<B: Backend> {
    /// Fitted parameter vector of length `n + 1` (bias weight at index 0).
    pub theta: Tensor1D<B>,
    /// Cost at the returned `theta`.
    pub cost: f64,
    /// Final learning rate after any halving backoffs.
    pub alpha: f64,
    /// Number of iterations actually executed.
    pub iters: usize,
    /// Per-feature mean used for normalization, length `n`.
    pub mean: Tensor1D<B>,
    /// Per-feature standard deviation used for normalization, length `n`.
    pub std: Tensor1D<B>,
}

/// Batch gradient descent optimizer.
///
/// # Example
/// ```rust
/// use linreg_gd::backend::{CpuBackend, Tensor1D, Tensor2D};
/// use linreg_gd::loss::SquaredError;
/// use linreg_gd::optimizer::GradientDescent;
///
/// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]);
/// let y = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0, 6.0]);
///
/// let fit = GradientDescent::new(0.1, 1000).run(&x, &y, &SquaredError);
/// assert!(fit.cost < 1e-10);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GradientDescent {
    alpha: f64,
    max_iters: usize,
}

impl GradientDescent {
    /// Creates an optimizer with initial learning rate `alpha` and a hard
    /// iteration cap of `max_iters`.
    pub fn new(alpha: f64, max_iters: usize) -> Self {
        Self { alpha, max_iters }
    }

    /// Minimizes `cost_fn` over the normalized version of `x`.
    ///
    /// The algorithm:
    /// 1. Standardize `x` and prepend the bias column, retaining `mean`/`std`.
    /// 2. Start from a zero `theta` of length `n + 1`.
    /// 3. While `cost > 0` and the cap is not reached: compute the residual
    ///    `h = X·theta − y`, take the batch step
    ///    `delta = (alpha/m) · Xᵀ·h` (every coordinate derived from the
    ///    pre-update `theta`), apply it, and re-evaluate the cost.
    /// 4. If the cost increased, revert the step and halve `alpha`; the
    ///    previous cost stays as the baseline for the next comparison.
    ///
    /// Evaluates `cost_fn` exactly `iters + 1` times.
    pub fn run<B: Backend, C: CostFunction<B>>(
        &self,
        x: &Tensor2D<B>,
        y: &Tensor1D<B>,
        cost_fn: &C,
    ) -> FitResult<B> {
        let NormalizedFeatures { x, mean, std } = normalize_features(x);
        let (m, n) = x.shape();

        let mut theta = Tensor1D::<B>::zeros(n);
        let mut alpha = self.alpha;
        let mut iters = 0;

        let mut cost = cost_fn.cost(&x, &theta, y);
        let mut old_cost = cost;

        while cost > 0.0 && iters < self.max_iters {
            iters += 1;

            // Simultaneous update: delta is computed in full from the
            // pre-update theta before any coordinate changes.
            let h = x.dot(&theta).sub(y);
            let delta = x.tdot(&h).scale(alpha / m as f64);
            theta = theta.sub(&delta);

            cost = cost_fn.cost(&x, &theta, y);

            if cost > old_cost {
                // Overshoot: undo the step and back off. old_cost keeps the
                // last accepted value so the next step is judged against the
                // same baseline.
                theta = theta.add(&delta);
                alpha /= 2.0;
            } else {
                old_cost = cost;
            }
        }

        FitResult {
            theta,
            cost,
            alpha,
            iters,
            mean,
            std,
        }
    }
}

/// Convenience wrapper: builds a [`GradientDescent`] and runs it once.
pub fn gradient_descent<B: Backend, C: CostFunction<B>>(
    x: &Tensor2D<B>,
    y: &Tensor1D<B>,
    cost_fn: &C,
    alpha: f64,
    max_iters: usize,
) -> FitResult<B> {
    GradientDescent::new(alpha, max_iters).run(x, y, cost_fn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;
    use crate::loss::SquaredError;
    use std::cell::Cell;

    /// Cost stub that replays a scripted sequence (last value repeats) and
    /// counts invocations.
    struct ScriptedCost {
        values: Vec<f64>,
        calls: Cell<usize>,
    }

    impl ScriptedCost {
        fn new(values: Vec<f64>) -> Self {
            Self {
                values,
                calls: Cell::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl CostFunction<CpuBackend> for ScriptedCost {
        fn cost(
            &self,
            _x: &Tensor2D<CpuBackend>,
            _theta: &Tensor1D<CpuBackend>,
            _y: &Tensor1D<CpuBackend>,
        ) -> f64 {
            let n = self.calls.get();
            self.calls.set(n + 1);
            *self.values.get(n.min(self.values.len() - 1)).unwrap()
        }
    }

    fn sample_data() -> (Tensor2D<CpuBackend>, Tensor1D<CpuBackend>) {
        let x = Tensor2D::from_rows(&[
            vec![34.0, 23.0],
            vec![20.0, 11.0],
            vec![41.0, 10.0],
            vec![54.0, 12.0],
        ]);
        let y = Tensor1D::new(vec![0.9, 1.1, 2.2, 0.8]);
        (x, y)
    }

    #[test]
    fn result_carries_normalization_statistics() {
        let (x, y) = sample_data();
        let cost_fn = ScriptedCost::new(vec![234.2344]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 0);

        assert_eq!(fit.mean.to_vec(), vec![37.25, 14.0]);
        let std = fit.std.to_vec();
        assert!((std[0] - 14.1745).abs() < 1e-4);
        assert!((std[1] - 6.0553).abs() < 1e-4);
    }

    #[test]
    fn zero_iterations_returns_initial_state() {
        let (x, y) = sample_data();
        let cost_fn = ScriptedCost::new(vec![234.2344]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 0);

        assert_eq!(fit.theta.to_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(fit.cost, 234.2344);
        assert_eq!(fit.alpha, 0.1);
        assert_eq!(fit.iters, 0);
        assert_eq!(cost_fn.calls(), 1);
    }

    #[test]
    fn single_iteration_takes_one_batch_step() {
        let (x, y) = sample_data();
        let cost_fn = ScriptedCost::new(vec![234.2344]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 1);

        assert_eq!(cost_fn.calls(), 2);
        assert_eq!(fit.iters, 1);
        assert_eq!(fit.alpha, 0.1);

        let theta = fit.theta.to_vec();
        assert!((theta[0] - 0.125).abs() < 1e-12);
        assert!((theta[1] - -0.0004409324232894696).abs() < 1e-9);
        assert!((theta[2] - -0.023120239067653578).abs() < 1e-9);
    }

    #[test]
    fn exhausting_the_cap_calls_cost_max_iters_plus_one_times() {
        let (x, y) = sample_data();
        let cost_fn = ScriptedCost::new(vec![234.2344]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 10);

        assert_eq!(cost_fn.calls(), 11);
        assert_eq!(fit.iters, 10);
        assert_eq!(fit.alpha, 0.1);
    }

    #[test]
    fn halves_alpha_each_time_cost_goes_up() {
        let (x, y) = sample_data();
        // first evaluation 20, every later one 50: each step is rejected
        let cost_fn = ScriptedCost::new(vec![20.0, 50.0]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 5);

        assert_eq!(cost_fn.calls(), 6);
        assert_eq!(fit.iters, 5);
        assert_eq!(fit.alpha, 0.1 / 32.0);
        // every step was reverted, so theta never moved
        assert_eq!(fit.theta.to_vec(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn stops_early_when_cost_reaches_zero() {
        let (x, y) = sample_data();
        let cost_fn = ScriptedCost::new(vec![5.0, 0.0]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 100);

        assert_eq!(fit.iters, 1);
        assert_eq!(fit.cost, 0.0);
        assert_eq!(cost_fn.calls(), 2);
    }

    #[test]
    fn zero_initial_cost_skips_the_loop_entirely() {
        let (x, y) = sample_data();
        let cost_fn = ScriptedCost::new(vec![0.0]);

        let fit = gradient_descent(&x, &y, &cost_fn, 0.1, 100);

        assert_eq!(fit.iters, 0);
        assert_eq!(cost_fn.calls(), 1);
    }

    #[test]
    fn converges_on_noiseless_linear_data() {
        // y = 3x + 2
        let x = Tensor2D::<CpuBackend>::from_rows(&[
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![3.0],
            vec![4.0],
        ]);
        let y = Tensor1D::new(vec![2.0, 5.0, 8.0, 11.0, 14.0]);

        let fit = gradient_descent(&x, &y, &SquaredError, 0.1, 2000);

        assert!(fit.cost < 1e-10, "cost = {}", fit.cost);
        // theta[0] is the mean of y in normalized space
        let theta = fit.theta.to_vec();
        assert!((theta[0] - 8.0).abs() < 1e-5);
    }
}

//! # linreg-gd
//!
//! Univariate and multivariate linear regression trained by batch gradient
//! descent, with feature standardization as a preprocessing step and an
//! adaptive (halving) learning-rate schedule.
//!
//! ## Core Design Principles
//!
//! - **Injected linear algebra**: the matrix/vector capability set (dot
//!   products, transpose, element-wise arithmetic, column statistics) lives
//!   behind the [`backend::Backend`] trait; the regression core never touches
//!   a concrete matrix library.
//! - **Explicit composition**: a normalizer function, a pure cost function, an
//!   optimizer and a model type — no hidden shared state between them.
//! - **Total optimization loop**: zero-variance columns are floored rather
//!   than erroring, divergent steps are reverted with a halved learning rate,
//!   and the iteration cap is a hard upper bound.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg_gd::backend::CpuBackend;
//! use linreg_gd::model::LinearRegression;
//!
//! let mut model = LinearRegression::<CpuBackend>::new(2);
//!
//! // Each training row: feature values followed by the target value.
//! model.add_data(&[
//!     vec![34.0, 23.0, 0.9],
//!     vec![20.0, 11.0, 1.1],
//!     vec![41.0, 10.0, 2.2],
//!     vec![54.0, 12.0, 0.8],
//! ])?;
//!
//! let fit = model.solve(0.1, 1000)?;
//! println!("cost {} after {} iterations", fit.cost, fit.iters);
//!
//! let estimate = model.predict(&[30.0, 15.0])?;
//! # let _ = estimate;
//! # Ok::<(), linreg_gd::model::RegressionError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`backend`] — linear-algebra abstraction and the `cpu`/`ndarray` backends
//! - [`preprocessing`] — feature standardization with bias column
//! - [`loss`] — the injectable cost function and [`loss::SquaredError`]
//! - [`optimizer`] — batch gradient descent with alpha-halving backoff
//! - [`model`] — the [`model::LinearRegression`] wrapper and its errors
//! - [`serialization`] — byte-level persistence of fitted parameters
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous: `solve` runs the full
//! iterative loop to completion before returning. Model instances are
//! independent; shard them across worker threads yourself if you need
//! parallelism.

pub mod backend;

/// Data preprocessing (feature standardization).
pub mod preprocessing;

/// Cost functions for the optimizer.
pub mod loss;

/// Batch gradient descent optimizer.
pub mod optimizer;

/// Regression models.
pub mod model;

/// Persistence of fitted parameters.
pub mod serialization;

#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
pub use backend::{Backend, Tensor1D, Tensor2D};
pub use loss::{CostFunction, SquaredError};
pub use model::{LinearRegression, RegressionError};
pub use optimizer::{gradient_descent, FitResult, GradientDescent};
pub use preprocessing::{normalize_features, NormalizedFeatures};

#[cfg(test)]
mod tests {
    use super::*;

    fn round4(v: &[f64]) -> Vec<f64> {
        v.iter().map(|x| (x * 1e4).round() / 1e4).collect()
    }

    #[test]
    fn end_to_end_single_feature() {
        // y = 0.5x - 1 with a little asymmetric noise
        let rows: Vec<Vec<f64>> = vec![
            vec![2.0, 0.1],
            vec![4.0, 1.0],
            vec![6.0, 1.9],
            vec![8.0, 3.1],
            vec![10.0, 4.0],
            vec![12.0, 4.9],
        ];

        let mut model = LinearRegression::<CpuBackend>::new(1);
        model.add_data(&rows).unwrap();
        let fit = model.solve(0.1, 3000).unwrap();
        assert!(fit.iters > 0);

        // the fit should reproduce the trend well inside the noise level
        for row in &rows {
            let got = model.predict(&row[..1]).unwrap();
            assert!((got - row[1]).abs() < 0.15, "predict({}) = {}", row[0], got);
        }
    }

    #[test]
    fn end_to_end_two_features_matches_direct_dot_product() {
        let mut model = LinearRegression::<CpuBackend>::new(2);
        model
            .add_data(&[
                vec![34.0, 23.0, 0.9],
                vec![20.0, 11.0, 1.1],
                vec![41.0, 10.0, 2.2],
                vec![54.0, 12.0, 0.8],
            ])
            .unwrap();

        let fit = model.solve(0.1, 500).unwrap();
        let theta = fit.theta.to_vec();
        let mean = fit.mean.to_vec();
        let std = fit.std.to_vec();
        assert_eq!(round4(&mean), vec![37.25, 14.0]);

        // predict == theta · [1, (x - mean)/std]
        let input = [30.0, 15.0];
        let want = theta[0]
            + theta[1] * (input[0] - mean[0]) / std[0]
            + theta[2] * (input[1] - mean[1]) / std[1];
        let got = model.predict(&input).unwrap();
        assert!((got - want).abs() < 1e-12);
    }

    #[test]
    fn optimizer_and_model_agree() {
        let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0]]);
        let y = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0, 6.0, 8.0]);

        let direct = gradient_descent(&x, &y, &SquaredError, 0.1, 1000);

        let mut model = LinearRegression::<CpuBackend>::new(1);
        model
            .add_data(&[
                vec![1.0, 2.0],
                vec![2.0, 4.0],
                vec![3.0, 6.0],
                vec![4.0, 8.0],
            ])
            .unwrap();
        let via_model = model.solve(0.1, 1000).unwrap();

        assert_eq!(direct.theta.to_vec(), via_model.theta.to_vec());
        assert_eq!(direct.cost, via_model.cost);
        assert_eq!(direct.iters, via_model.iters);
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn backends_produce_identical_fits() {
        use crate::backend::NdarrayBackend;

        let rows = [
            vec![34.0, 23.0, 0.9],
            vec![20.0, 11.0, 1.1],
            vec![41.0, 10.0, 2.2],
            vec![54.0, 12.0, 0.8],
        ];

        let mut cpu = LinearRegression::<CpuBackend>::new(2);
        cpu.add_data(&rows).unwrap();
        let cpu_fit = cpu.solve(0.1, 100).unwrap();
        let (cpu_theta, cpu_cost, cpu_iters) =
            (cpu_fit.theta.to_vec(), cpu_fit.cost, cpu_fit.iters);

        let mut nd = LinearRegression::<NdarrayBackend>::new(2);
        nd.add_data(&rows).unwrap();
        let nd_fit = nd.solve(0.1, 100).unwrap();

        assert_eq!(cpu_iters, nd_fit.iters);
        assert!((cpu_cost - nd_fit.cost).abs() < 1e-12);
        for (a, b) in cpu_theta.iter().zip(nd_fit.theta.to_vec().iter()) {
            assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn constant_feature_still_trains() {
        // second feature is constant; its normalized column is all zeros and
        // its weight stays where the gradient puts it (zero)
        let mut model = LinearRegression::<CpuBackend>::new(2);
        model
            .add_data(&[
                vec![1.0, 7.0, 2.0],
                vec![2.0, 7.0, 4.0],
                vec![3.0, 7.0, 6.0],
            ])
            .unwrap();

        let fit = model.solve(0.1, 2000).unwrap();
        assert!(fit.cost < 1e-10);
        assert!(fit.theta.to_vec()[2].abs() < 1e-12);

        let got = model.predict(&[2.5, 7.0]).unwrap();
        assert!((got - 5.0).abs() < 1e-4);
    }
}

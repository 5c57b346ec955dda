//! Linear regression model: accumulate rows, solve, predict.
//!
//! [`LinearRegression`] is a stateful wrapper around the gradient-descent
//! optimizer. It has two runtime states:
//!
//! - **Unfit** — training rows can be accumulated with [`LinearRegression::add_data`];
//!   [`LinearRegression::predict`] fails with [`RegressionError::NotSolved`].
//! - **Fit** — after a successful [`LinearRegression::solve`] the model holds a
//!   [`FitResult`] (parameters plus the normalization statistics) and can
//!   predict on raw, unnormalized inputs.
//!
//! A later `solve` replaces the previous fit entirely. The model mutates its
//! own state without locking; instances must not be shared across concurrent
//! callers without external synchronization. Callers needing parallelism
//! should shard independent models across workers.

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::loss::SquaredError;
use crate::model::RegressionError;
use crate::optimizer::{FitResult, GradientDescent};

/// Linear regression solver over `num_features` independent variables.
///
/// # Example
/// ```rust
/// use linreg_gd::backend::CpuBackend;
/// use linreg_gd::model::LinearRegression;
///
/// let mut model = LinearRegression::<CpuBackend>::new(1);
/// // each row: features..., then the target
/// model.add_data(&[vec![0.0, 2.0], vec![1.0, 5.0], vec![2.0, 8.0]])?;
///
/// let fit = model.solve(0.1, 1000)?;
/// assert!(fit.cost < 1e-8);
///
/// let y = model.predict(&[3.0])?;
/// assert!((y - 11.0).abs() < 1e-3);
/// # Ok::<(), linreg_gd::model::RegressionError>(())
/// ```
pub struct LinearRegression<B: Backend> {
    num_features: usize,
    data_x: Vec<Vec<f64>>,
    data_y: Vec<f64>,
    fit: Option<FitResult<B>>,
}

impl<B: Backend> LinearRegression<B> {
    /// Creates an unfit model expecting `num_features` features per row.
    pub fn new(num_features: usize) -> Self {
        Self {
            num_features,
            data_x: Vec::new(),
            data_y: Vec::new(),
            fit: None,
        }
    }

    /// Number of features this model was configured with.
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Number of training rows accumulated so far.
    pub fn num_rows(&self) -> usize {
        self.data_y.len()
    }

    /// Appends training rows.
    ///
    /// Each row holds the feature values followed by the target value, so it
    /// must contain strictly more than `num_features` entries. Values beyond
    /// position `num_features` are ignored.
    ///
    /// # Errors
    /// [`RegressionError::NotEnoughData`] for the first row that is too short.
    /// The batch is not atomic: valid rows appended before the failing one
    /// remain in the training set.
    pub fn add_data(&mut self, rows: &[Vec<f64>]) -> Result<(), RegressionError> {
        for row in rows {
            if row.len() <= self.num_features {
                return Err(RegressionError::NotEnoughData {
                    expected: self.num_features + 1,
                    got: row.len(),
                });
            }
            self.data_x.push(row[..self.num_features].to_vec());
            self.data_y.push(row[self.num_features]);
        }
        Ok(())
    }

    /// Solves the regression by batch gradient descent.
    ///
    /// Builds the feature matrix and target vector from all accumulated rows,
    /// runs [`GradientDescent`] with the [`SquaredError`] cost, stores the
    /// result as the current fit (replacing any previous one) and returns it.
    ///
    /// # Errors
    /// [`RegressionError::EmptyTrainingSet`] if no rows have been added.
    pub fn solve(
        &mut self,
        alpha: f64,
        max_iters: usize,
    ) -> Result<&FitResult<B>, RegressionError> {
        if self.data_y.is_empty() {
            return Err(RegressionError::EmptyTrainingSet);
        }

        let x = Tensor2D::<B>::from_rows(&self.data_x);
        let y = Tensor1D::<B>::new(self.data_y.clone());

        let fit = GradientDescent::new(alpha, max_iters).run(&x, &y, &SquaredError);
        Ok(&*self.fit.insert(fit))
    }

    /// The current fit, if [`solve`](Self::solve) has succeeded.
    pub fn fit_result(&self) -> Option<&FitResult<B>> {
        self.fit.as_ref()
    }

    /// Predicts the target for a raw (unnormalized) input.
    ///
    /// The input is standardized with the `mean`/`std` stored by the last
    /// `solve` — not recomputed — and the implicit bias `1` is prepended so the
    /// stored theta's intercept weight applies:
    /// `y = θ₀ + Σⱼ θⱼ₊₁ · (input[j] − mean[j]) / std[j]`.
    ///
    /// # Errors
    /// - [`RegressionError::NotSolved`] if no successful `solve` has occurred.
    /// - [`RegressionError::FeatureMismatch`] if `input.len() != num_features`.
    pub fn predict(&self, input: &[f64]) -> Result<f64, RegressionError> {
        let fit = self.fit.as_ref().ok_or(RegressionError::NotSolved)?;

        if input.len() != self.num_features {
            return Err(RegressionError::FeatureMismatch {
                expected: self.num_features,
                got: input.len(),
            });
        }

        let mean = fit.mean.to_vec();
        let std = fit.std.to_vec();

        let mut row = Vec::with_capacity(self.num_features + 1);
        row.push(1.0);
        for j in 0..self.num_features {
            row.push((input[j] - mean[j]) / std[j]);
        }

        Ok(Tensor1D::<B>::new(row).dot(&fit.theta))
    }
}

/// Serializable representation of a fitted model.
///
/// Converts the backend-specific tensors of a [`FitResult`] into plain
/// `Vec<f64>` for storage. Round-trips through
/// [`LinearRegression::extract_params`] / [`LinearRegression::from_params`].
#[cfg(feature = "serde")]
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FitParams {
    pub num_features: usize,
    pub theta: Vec<f64>,
    pub cost: f64,
    pub alpha: f64,
    pub iters: usize,
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

#[cfg(feature = "serde")]
impl<B: Backend> LinearRegression<B> {
    /// Extracts the current fit as plain serializable data.
    ///
    /// # Errors
    /// [`RegressionError::NotSolved`] if the model is unfit.
    pub fn extract_params(&self) -> Result<FitParams, RegressionError> {
        let fit = self.fit.as_ref().ok_or(RegressionError::NotSolved)?;
        Ok(FitParams {
            num_features: self.num_features,
            theta: fit.theta.to_vec(),
            cost: fit.cost,
            alpha: fit.alpha,
            iters: fit.iters,
            mean: fit.mean.to_vec(),
            std: fit.std.to_vec(),
        })
    }

    /// Reconstructs a model in the Fit state from extracted parameters.
    ///
    /// The reconstructed model carries no training rows; it is intended for
    /// inference only.
    pub fn from_params(params: FitParams) -> Self {
        let fit = FitResult {
            theta: Tensor1D::new(params.theta),
            cost: params.cost,
            alpha: params.alpha,
            iters: params.iters,
            mean: Tensor1D::new(params.mean),
            std: Tensor1D::new(params.std),
        };
        Self {
            num_features: params.num_features,
            data_x: Vec::new(),
            data_y: Vec::new(),
            fit: Some(fit),
        }
    }

    /// Saves the current fit to a file (bincode).
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use crate::serialization::SerializableParams;

        let params = self
            .extract_params()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Loads a fitted model from a file written by
    /// [`save_to_file`](Self::save_to_file).
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        use crate::serialization::SerializableParams;

        let bytes = std::fs::read(path)?;
        let params = FitParams::from_bytes(&bytes).map_err(std::io::Error::other)?;
        Ok(Self::from_params(params))
    }
}

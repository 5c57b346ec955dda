//! Feature standardization (Z-score normalization) with bias column.
//!
//! Transforms a raw feature matrix column-by-column by removing the mean and
//! scaling to unit variance:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the column mean and `s` the *sample* standard deviation
//! (Bessel's correction, `m − 1` denominator). The result is augmented with a
//! constant `1` column at index 0 for the intercept term, so a parameter vector
//! of length `n + 1` can absorb the bias through an ordinary dot product.
//!
//! The learned `mean`/`std` are returned alongside the normalized matrix so
//! later predictions can standardize new inputs with the *training-time*
//! statistics rather than recomputing them.

use crate::backend::{Backend, Tensor1D, Tensor2D};

/// Substitute for a zero standard deviation.
///
/// A constant feature column has zero variance; dividing by this floor instead
/// of zero keeps the optimizer total and maps the whole column to `0`, which is
/// a defined (if arbitrary) normalized value. A single-row training set is the
/// same degenerate case, since the sample-std denominator `m − 1` vanishes.
pub const STD_FLOOR: f64 = f64::EPSILON;

/// Output of [`normalize_features`]: the standardized matrix plus the
/// statistics it was standardized with.
#[derive(Clone)]
pub struct NormalizedFeatures<B: Backend> {
    /// `m × (n+1)` matrix; column 0 is the constant bias column of `1`s,
    /// column `j+1` holds `(X[i][j] − mean[j]) / std[j]`.
    pub x: Tensor2D<B>,
    /// Per-feature arithmetic mean, length `n`.
    pub mean: Tensor1D<B>,
    /// Per-feature sample standard deviation, length `n`; never zero
    /// (floored to [`STD_FLOOR`]).
    pub std: Tensor1D<B>,
}

/// Standardizes `x` column-by-column and prepends the bias column.
///
/// Returns new tensors; the input is never mutated.
///
/// # Example
/// ```rust
/// use linreg_gd::backend::{CpuBackend, Tensor2D};
/// use linreg_gd::preprocessing::normalize_features;
///
/// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]);
/// let norm = normalize_features(&x);
///
/// assert_eq!(norm.x.shape(), (3, 2));
/// assert_eq!(norm.mean.to_vec(), vec![2.0]);
/// ```
pub fn normalize_features<B: Backend>(x: &Tensor2D<B>) -> NormalizedFeatures<B> {
    let (m, _n) = x.shape();

    let mean = x.col_mean();
    // Sample std; zero-variance columns (and m == 1) are floored so the
    // division below is always defined.
    let std = Tensor1D::new(
        x.col_std(1)
            .to_vec()
            .into_iter()
            .map(|s| if s == 0.0 { STD_FLOOR } else { s })
            .collect(),
    );

    let standardized = x.sub_rows(&mean).div_rows(&std);
    let bias = Tensor2D::ones(m, 1);
    let x_norm = Tensor2D::hcat(&[bias, standardized]);

    NormalizedFeatures {
        x: x_norm,
        mean,
        std,
    }
}

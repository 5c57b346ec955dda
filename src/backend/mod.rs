//! # Backend Abstraction
//!
//! This module provides a trait-based abstraction over linear-algebra backends,
//! so the regression core never hard-wires a particular matrix library.
//!
//! ## Design Philosophy
//!
//! - **Minimal trait surface**: only the operations the normalizer, cost function
//!   and optimizer actually need are exposed — construction, shape accessors,
//!   dot products, transpose, element-wise add/subtract, column statistics and
//!   row broadcasting.
//! - **Zero-cost generics**: backend selection happens at compile time via type
//!   parameters, avoiding runtime dispatch overhead.
//! - **Type-safe tensor handling**: [`Tensor1D`] and [`Tensor2D`] carry their
//!   backend as a phantom type, preventing accidental mixing of tensors from
//!   different backends at compile time.
//! - **Feature-gated implementations**: backends are enabled via Cargo features
//!   (`cpu`, `ndarray`), allowing users to minimize dependencies.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Use Case                          |
//! |------------------|-----------|-----------------------------------|
//! | `CpuBackend`     | `cpu`     | Default, pure-Rust implementation |
//! | `NdarrayBackend` | `ndarray` | Interop with `ndarray` ecosystem  |
//!
//! ## Example
//!
//! ```rust
//! use linreg_gd::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor2D<CpuBackend> = Tensor2D::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
//! let theta: Tensor1D<CpuBackend> = Tensor1D::new(vec![0.5, 0.5]);
//!
//! // Per-row dot product: X * theta
//! let h = x.dot(&theta);
//! assert_eq!(h.to_vec(), vec![1.5, 3.5]);
//! ```

#[cfg(feature = "cpu")]
pub mod cpu;
#[cfg(feature = "cpu")]
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// One-dimensional tensor wrapper.
pub mod tensor1d;
/// Two-dimensional tensor wrapper.
pub mod tensor2d;

pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

/// Abstraction over linear-algebra implementations.
///
/// The `Backend` trait defines the capability set the regression core consumes
/// from its linear-algebra collaborator: matrix/vector construction from numeric
/// sequences, row/column accessors, per-row dot product, element-wise
/// subtract/add, transpose, column statistics and row broadcasting.
///
/// All arithmetic is `f64`; convergence assertions on fitted parameters are made
/// to four decimal places, which single precision cannot sustain for
/// large-magnitude targets.
///
/// # Safety Guarantees
///
/// - Shape-checked operations (`matvec`, `matvec_transposed`, `hcat_2d`,
///   element-wise ops) panic on mismatched dimensions.
/// - Tensor types are `Clone + Send + Sync` so independent models can be
///   sharded across threads by the caller.
pub trait Backend: Clone + Copy + 'static {
    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync + std::fmt::Debug;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    /// Creates a 2D tensor filled with ones of given dimensions.
    ///
    /// Used to build the bias (intercept) column during normalization.
    fn ones_2d(rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations ---

    /// Element-wise addition of two 1D tensors.
    ///
    /// # Panics
    /// If tensors have different lengths.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two 1D tensors.
    ///
    /// # Panics
    /// If tensors have different lengths.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of a 1D tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D;

    // --- Linear algebra ---

    /// Dot product of two 1D tensors.
    ///
    /// # Panics
    /// If tensors have different lengths.
    fn dot_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> f64;

    /// Matrix-vector multiplication.
    ///
    /// Computes `y = A * x` where `A` is (m × n) and `x` is (n,); the result is
    /// the vector of per-row dot products.
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Transposed matrix-vector multiplication.
    ///
    /// Computes `y = A^T * x` where `A` is (m × n) and `x` is (m,).
    ///
    /// # Panics
    /// If `A.rows() != x.len()`.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Returns the transpose of a 2D tensor.
    fn transpose(t: &Self::Tensor2D) -> Self::Tensor2D;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    // --- Column-wise statistics (for normalization) ---

    /// Computes the mean of each column in a 2D tensor.
    ///
    /// Returns a 1D tensor of length `cols`.
    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// Computes the standard deviation of each column in a 2D tensor.
    ///
    /// `ddof` is the delta degrees of freedom: `1` for the sample standard
    /// deviation (Bessel's correction), `0` for the population form. When
    /// `rows <= ddof` the deviation is reported as `0.0` rather than dividing
    /// by zero; the caller decides how to treat zero-variance columns.
    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D;

    /// Computes the sum of each column in a 2D tensor.
    fn col_sum_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    // --- Broadcasting operations ---

    /// Subtracts a 1D tensor from each row of a 2D tensor.
    ///
    /// Result[i, j] = t[i, j] - v[j]
    ///
    /// # Panics
    /// If `v.len() != t.cols()`.
    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// Divides each row of a 2D tensor by a 1D tensor element-wise.
    ///
    /// Result[i, j] = t[i, j] / v[j]
    ///
    /// # Panics
    /// If `v.len() != t.cols()`.
    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    // --- Column manipulation ---

    /// Horizontally concatenates 2D tensors (stack columns side by side).
    ///
    /// # Panics
    /// If the slice is empty or the tensors have different row counts.
    fn hcat_2d(tensors: &[Self::Tensor2D]) -> Self::Tensor2D;

    // --- Data access ---

    /// Converts a 1D tensor to a `Vec<f64>` for host interoperability.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Flattens a 2D tensor into a row-major 1D tensor.
    fn ravel_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;
}

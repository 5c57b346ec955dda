use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 2D tensor (matrix), row-major.
///
/// See [`Tensor1D`] for the phantom-type design; the same guarantees apply.
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Creates a matrix from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Creates a matrix from a slice of equal-length rows.
    ///
    /// # Panics
    /// If rows have inconsistent lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == n),
            "all rows must have the same length"
        );
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Self::new(data, m, n)
    }

    /// Creates a matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: B::ones_2d(rows, cols),
            backend: PhantomData,
        }
    }

    /// Returns the shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    /// Matrix-vector product (the vector of per-row dot products).
    ///
    /// # Panics
    /// If `self.cols() != x.len()`.
    pub fn dot(&self, x: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec(&self.data, &x.data),
            backend: PhantomData,
        }
    }

    /// Transposed matrix-vector product: `selfᵀ · x`.
    ///
    /// # Panics
    /// If `self.rows() != x.len()`.
    pub fn tdot(&self, x: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec_transposed(&self.data, &x.data),
            backend: PhantomData,
        }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        Self {
            data: B::transpose(&self.data),
            backend: PhantomData,
        }
    }

    /// Per-column mean, as a tensor of length `cols`.
    pub fn col_mean(&self) -> Tensor1D<B> {
        Tensor1D {
            data: B::col_mean_2d(&self.data),
            backend: PhantomData,
        }
    }

    /// Per-column standard deviation with `ddof` delta degrees of freedom
    /// (`1` for the sample form with Bessel's correction).
    ///
    /// Columns whose denominator would be zero (`rows <= ddof`) report `0.0`.
    pub fn col_std(&self, ddof: usize) -> Tensor1D<B> {
        Tensor1D {
            data: B::col_std_2d(&self.data, ddof),
            backend: PhantomData,
        }
    }

    /// Per-column sum, as a tensor of length `cols`.
    pub fn col_sum(&self) -> Tensor1D<B> {
        Tensor1D {
            data: B::col_sum_2d(&self.data),
            backend: PhantomData,
        }
    }

    /// Subtracts `v` from every row.
    ///
    /// # Panics
    /// If `v.len() != self.cols()`.
    pub fn sub_rows(&self, v: &Tensor1D<B>) -> Self {
        Self {
            data: B::broadcast_sub_1d_to_2d_rows(&self.data, &v.data),
            backend: PhantomData,
        }
    }

    /// Divides every row by `v`, element-wise.
    ///
    /// # Panics
    /// If `v.len() != self.cols()`.
    pub fn div_rows(&self, v: &Tensor1D<B>) -> Self {
        Self {
            data: B::broadcast_div_1d_to_2d_rows(&self.data, &v.data),
            backend: PhantomData,
        }
    }

    /// Horizontally concatenates matrices (columns side by side).
    ///
    /// # Panics
    /// If `tensors` is empty or row counts differ.
    pub fn hcat(tensors: &[Self]) -> Self {
        let raw: Vec<B::Tensor2D> = tensors.iter().map(|t| t.data.clone()).collect();
        Self {
            data: B::hcat_2d(&raw),
            backend: PhantomData,
        }
    }

    /// Flattens into a row-major 1D tensor.
    pub fn ravel(&self) -> Tensor1D<B> {
        Tensor1D {
            data: B::ravel_2d(&self.data),
            backend: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn dot_and_tdot() {
        // A = [[1, 2], [3, 4]]
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        assert_eq!(a.dot(&x).to_vec(), vec![1.0, 3.0]);
        assert_eq!(a.tdot(&x).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn from_rows_preserves_layout() {
        let a = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a.ravel().to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn column_statistics() {
        let a = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 10.0], vec![3.0, 20.0]]);
        assert_eq!(a.col_mean().to_vec(), vec![2.0, 15.0]);
        assert_eq!(a.col_sum().to_vec(), vec![4.0, 30.0]);
    }

    #[test]
    #[should_panic(expected = "all rows must have the same length")]
    fn from_rows_rejects_ragged_input() {
        Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    }
}

use super::Backend;
use ndarray::{concatenate, Array1, Array2, Axis};

/// Backend backed by the `ndarray` crate.
///
/// Provides the same capability set as [`super::CpuBackend`] on top of
/// ndarray's array types, for callers that already live in the ndarray
/// ecosystem.
///
/// # Type mappings
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`] wrapper around `ndarray::Array2<f64>`
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
///
/// The newtype enables trait implementation for the external type while
/// providing convenient conversion from nested `Vec` representations commonly
/// used in tests and data loading.
#[derive(Debug, Clone)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl From<&[Vec<f64>]> for NdarrayTensor2D {
    /// Converts a slice of row vectors into a 2D tensor.
    ///
    /// # Panics
    /// If rows have inconsistent lengths.
    fn from(x: &[Vec<f64>]) -> Self {
        let rows = x.len();
        if rows == 0 {
            return NdarrayTensor2D(Array2::from_shape_vec((0, 0), vec![]).unwrap());
        }
        let cols = x[0].len();
        assert!(x.iter().all(|r| r.len() == cols));
        let data: Vec<f64> = x.iter().flat_map(|r| r.iter()).copied().collect();
        NdarrayTensor2D(Array2::from_shape_vec((rows, cols), data).unwrap())
    }
}

impl Backend for NdarrayBackend {
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(
            Array2::from_shape_vec((rows, cols), data).expect("inconsistent shape"),
        )
    }

    fn ones_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(Array2::ones((rows, cols)))
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t * s
    }

    fn dot_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> f64 {
        a.dot(b)
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.dot(x)
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.t().dot(x)
    }

    fn transpose(t: &Self::Tensor2D) -> Self::Tensor2D {
        NdarrayTensor2D(t.0.t().to_owned())
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let rows = t.0.nrows();
        t.0.sum_axis(Axis(0)) / rows as f64
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        let rows = t.0.nrows();
        let cols = t.0.ncols();
        let denom = rows.saturating_sub(ddof);
        if denom == 0 {
            return Array1::zeros(cols);
        }
        let mean = Self::col_mean_2d(t);
        let centered = &t.0 - &mean.broadcast((rows, cols)).expect("broadcast failed");
        let ssd = centered.mapv(|d| d * d).sum_axis(Axis(0));
        (ssd / denom as f64).mapv(f64::sqrt)
    }

    fn col_sum_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.sum_axis(Axis(0))
    }

    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 - &v.broadcast(t.0.dim()).expect("broadcast failed"))
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 / &v.broadcast(t.0.dim()).expect("broadcast failed"))
    }

    fn hcat_2d(tensors: &[Self::Tensor2D]) -> Self::Tensor2D {
        assert!(!tensors.is_empty(), "hcat_2d of empty slice");
        let views: Vec<_> = tensors.iter().map(|t| t.0.view()).collect();
        NdarrayTensor2D(concatenate(Axis(1), &views).expect("hcat_2d row count mismatch"))
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn ravel_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.iter().copied().collect()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matvec_and_transposed_agree_with_explicit_transpose() {
        let a = NdarrayTensor2D::from(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]][..]);
        let x = Array1::from_vec(vec![1.0, -1.0, 2.0]);

        let via_t = NdarrayBackend::matvec(&NdarrayBackend::transpose(&a), &x);
        assert_eq!(NdarrayBackend::matvec_transposed(&a, &x), via_t);
    }

    #[test]
    fn col_std_uses_requested_ddof() {
        let a = NdarrayTensor2D::from(&[vec![2.0], vec![5.0], vec![-10.0]][..]);

        let sample = NdarrayBackend::col_std_2d(&a, 1);
        assert!((sample[0] - (126.0f64 / 2.0).sqrt()).abs() < 1e-12);

        let single = NdarrayTensor2D::from(&[vec![7.0]][..]);
        assert_eq!(NdarrayBackend::col_std_2d(&single, 1)[0], 0.0);
    }

    #[test]
    fn hcat_prepends_bias_column() {
        let ones = NdarrayBackend::ones_2d(2, 1);
        let a = NdarrayTensor2D::from(&[vec![1.0, 2.0], vec![3.0, 4.0]][..]);

        let cat = NdarrayBackend::hcat_2d(&[ones, a]);
        assert_eq!(NdarrayBackend::shape(&cat), (2, 3));
        assert_eq!(
            NdarrayBackend::to_vec_1d(&NdarrayBackend::ravel_2d(&cat)),
            vec![1.0, 1.0, 2.0, 1.0, 3.0, 4.0]
        );
    }

    #[test]
    fn broadcast_ops_apply_per_column() {
        let a = NdarrayTensor2D::from(&[vec![4.0, 9.0], vec![6.0, 12.0]][..]);
        let v = Array1::from_vec(vec![2.0, 3.0]);

        let sub = NdarrayBackend::broadcast_sub_1d_to_2d_rows(&a, &v);
        assert_eq!(sub.0[[1, 1]], 9.0);

        let div = NdarrayBackend::broadcast_div_1d_to_2d_rows(&a, &v);
        assert_eq!(div.0[[1, 1]], 4.0);
    }
}

use super::Backend;

/// Pure-Rust CPU backend with zero external dependencies.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major 2D tensor storage: (data, rows, cols).
#[derive(Debug, Clone)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    /// Creates a tensor from row-major data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "inconsistent shape");
        Self(data, rows, cols)
    }
}

impl From<&[Vec<f64>]> for CpuTensor2D {
    fn from(x: &[Vec<f64>]) -> Self {
        if x.is_empty() {
            return CpuTensor2D::new(Vec::new(), 0, 0);
        }
        let rows = x.len();
        let cols = x[0].len();
        assert!(
            x.iter().all(|row| row.len() == cols),
            "all rows must have the same length"
        );
        let data: Vec<f64> = x.iter().flat_map(|row| row.iter()).copied().collect();
        CpuTensor2D::new(data, rows, cols)
    }
}

impl Backend for CpuBackend {
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    // --- Constructors ---

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.0; len]
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data, rows, cols)
    }

    fn ones_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(vec![1.0; rows * cols], rows, cols)
    }

    // --- Element-wise ops ---

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a + b).collect()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    // --- Linear algebra ---

    fn dot_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> f64 {
        assert_eq!(a.len(), b.len(), "length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a * b).sum()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        let (rows, cols) = (a.1, a.2);
        assert_eq!(cols, x.len(), "matvec shape mismatch");
        (0..rows)
            .map(|i| {
                a.0[i * cols..(i + 1) * cols]
                    .iter()
                    .zip(x.iter())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect()
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        let (rows, cols) = (a.1, a.2);
        assert_eq!(rows, x.len(), "matvec_transposed shape mismatch");
        let mut out = vec![0.0; cols];
        for i in 0..rows {
            let row = &a.0[i * cols..(i + 1) * cols];
            for j in 0..cols {
                out[j] += row[j] * x[i];
            }
        }
        out
    }

    fn transpose(t: &Self::Tensor2D) -> Self::Tensor2D {
        let (rows, cols) = (t.1, t.2);
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                data[j * rows + i] = t.0[i * cols + j];
            }
        }
        CpuTensor2D::new(data, cols, rows)
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    // --- Column-wise statistics ---

    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let rows = t.1;
        let sums = Self::col_sum_2d(t);
        sums.iter().map(|s| s / rows as f64).collect()
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        let (rows, cols) = (t.1, t.2);
        let mean = Self::col_mean_2d(t);
        let mut ssd = vec![0.0; cols];
        for i in 0..rows {
            for j in 0..cols {
                let d = t.0[i * cols + j] - mean[j];
                ssd[j] += d * d;
            }
        }
        let denom = rows.saturating_sub(ddof);
        if denom == 0 {
            return vec![0.0; cols];
        }
        ssd.iter().map(|s| (s / denom as f64).sqrt()).collect()
    }

    fn col_sum_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let (rows, cols) = (t.1, t.2);
        let mut sums = vec![0.0; cols];
        for i in 0..rows {
            for j in 0..cols {
                sums[j] += t.0[i * cols + j];
            }
        }
        sums
    }

    // --- Broadcasting ---

    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        let (rows, cols) = (t.1, t.2);
        assert_eq!(cols, v.len(), "broadcast shape mismatch");
        let data = t
            .0
            .iter()
            .enumerate()
            .map(|(k, x)| x - v[k % cols])
            .collect();
        CpuTensor2D::new(data, rows, cols)
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        let (rows, cols) = (t.1, t.2);
        assert_eq!(cols, v.len(), "broadcast shape mismatch");
        let data = t
            .0
            .iter()
            .enumerate()
            .map(|(k, x)| x / v[k % cols])
            .collect();
        CpuTensor2D::new(data, rows, cols)
    }

    // --- Column manipulation ---

    fn hcat_2d(tensors: &[Self::Tensor2D]) -> Self::Tensor2D {
        assert!(!tensors.is_empty(), "hcat_2d of empty slice");
        let rows = tensors[0].1;
        assert!(
            tensors.iter().all(|t| t.1 == rows),
            "hcat_2d row count mismatch"
        );
        let cols: usize = tensors.iter().map(|t| t.2).sum();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for t in tensors {
                data.extend_from_slice(&t.0[i * t.2..(i + 1) * t.2]);
            }
        }
        CpuTensor2D::new(data, rows, cols)
    }

    // --- Data access ---

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn ravel_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }
}

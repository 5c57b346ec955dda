use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native 1D representation (`B::Tensor1D`) while carrying
/// phantom type information about its originating backend, so tensors from
/// different backends cannot be mixed at compile time. `PhantomData` adds no
/// runtime overhead; every operation delegates directly to the backend.
///
/// ```compile_fail
/// use linreg_gd::backend::{CpuBackend, NdarrayBackend, Tensor1D};
///
/// let a: Tensor1D<CpuBackend> = Tensor1D::zeros(3);
/// let b: Tensor1D<NdarrayBackend> = Tensor1D::zeros(3);
/// let _ = a.sub(&b); // COMPILE ERROR: mismatched backends
/// ```
#[derive(Clone, Debug)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a new 1D tensor from a vector of values.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: B::from_vec_1d(data),
            backend: PhantomData,
        }
    }

    /// Creates a 1D tensor filled with zeros of specified length.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: B::zeros_1d(len),
            backend: PhantomData,
        }
    }

    /// Element-wise addition: `self + other`.
    ///
    /// # Panics
    /// If tensors have different lengths.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            data: B::add_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Element-wise subtraction: `self - other`.
    ///
    /// # Panics
    /// If tensors have different lengths.
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            data: B::sub_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Multiplies every element by a scalar.
    pub fn scale(&self, s: f64) -> Self {
        Self {
            data: B::mul_scalar_1d(&self.data, s),
            backend: PhantomData,
        }
    }

    /// Dot product with another tensor.
    ///
    /// # Panics
    /// If tensors have different lengths.
    pub fn dot(&self, other: &Self) -> f64 {
        B::dot_1d(&self.data, &other.data)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts the tensor to a `Vec<f64>` for host interoperability.
    ///
    /// Intended for assertions, serialization and debugging rather than hot
    /// paths, since it allocates.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn arithmetic_round_trip() {
        let a = Tensor1D::<CpuBackend>::new(vec![5.0, 7.0, 9.0]);
        let b = Tensor1D::<CpuBackend>::new(vec![2.0, 3.0, 4.0]);

        assert_eq!(a.sub(&b).to_vec(), vec![3.0, 4.0, 5.0]);
        assert_eq!(a.add(&b).to_vec(), vec![7.0, 10.0, 13.0]);
        assert_eq!(a.scale(2.0).to_vec(), vec![10.0, 14.0, 18.0]);
        assert_eq!(a.dot(&b), 10.0 + 21.0 + 36.0);
    }

    #[test]
    fn zeros_has_expected_length() {
        let z = Tensor1D::<CpuBackend>::zeros(4);
        assert_eq!(z.len(), 4);
        assert_eq!(z.to_vec(), vec![0.0; 4]);
    }
}

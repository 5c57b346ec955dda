//! Regression models and their error surface.

use std::fmt;

pub mod linear;

pub use linear::LinearRegression;
#[cfg(feature = "serde")]
pub use linear::FitParams;

/// Error type for model operations.
///
/// All variants are local precondition violations surfaced directly to the
/// caller; there is no internal retry. Numeric degeneracy (a zero standard
/// deviation during normalization) is deliberately *not* an error — see
/// [`crate::preprocessing::STD_FLOOR`].
#[derive(Debug)]
pub enum RegressionError {
    /// A training row had fewer values than `num_features + 1` (features plus
    /// one target).
    NotEnoughData { expected: usize, got: usize },
    /// `predict` was called before any successful `solve`.
    NotSolved,
    /// `solve` was called with no accumulated training rows.
    EmptyTrainingSet,
    /// A prediction input had the wrong number of features.
    FeatureMismatch { expected: usize, got: usize },
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::NotEnoughData { expected, got } => {
                write!(
                    f,
                    "not enough data: row needs at least {} values, got {}",
                    expected, got
                )
            }
            RegressionError::NotSolved => {
                write!(f, "need to solve first")
            }
            RegressionError::EmptyTrainingSet => {
                write!(f, "cannot solve with an empty training set")
            }
            RegressionError::FeatureMismatch { expected, got } => {
                write!(
                    f,
                    "feature mismatch: expected {} features, got {}",
                    expected, got
                )
            }
        }
    }
}

impl std::error::Error for RegressionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = RegressionError::NotEnoughData {
            expected: 6,
            got: 5,
        };
        assert!(err.to_string().contains("not enough data"));

        assert!(RegressionError::NotSolved
            .to_string()
            .contains("need to solve first"));

        let err = RegressionError::FeatureMismatch {
            expected: 2,
            got: 3,
        };
        assert!(err.to_string().contains("feature mismatch"));
    }

    #[test]
    fn is_std_error() {
        let err = RegressionError::EmptyTrainingSet;
        let _: &dyn std::error::Error = &err;
    }
}

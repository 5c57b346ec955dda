//! Data preprocessing for the regression pipeline.

pub mod normalize;

pub use normalize::{normalize_features, NormalizedFeatures, STD_FLOOR};

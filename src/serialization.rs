//! Byte-level persistence of fitted parameters.
//!
//! A fit is stored as [`FitParams`](crate::model::FitParams) — plain `Vec<f64>`
//! data, no backend tensors — so a model saved under one backend can be
//! reloaded under another. Encoding is bincode behind the `serde` feature.

use std::error::Error;

/// Parameter payloads that encode to and decode from a byte buffer.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Encode the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Decode parameters from a byte buffer produced by
    /// [`to_bytes`](Self::to_bytes).
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

#[cfg(feature = "serde")]
impl SerializableParams for crate::model::FitParams {
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::model::FitParams;

    fn sample_params() -> FitParams {
        FitParams {
            num_features: 2,
            theta: vec![0.125, -0.0004409324232894696, -0.023120239067653578],
            cost: 0.6998,
            alpha: 0.025,
            iters: 1,
            mean: vec![37.25, 14.0],
            std: vec![14.174507634014956, 6.0553007081949835],
        }
    }

    #[test]
    fn fit_params_round_trip_through_bytes() {
        let params = sample_params();
        let bytes = params.to_bytes().unwrap();
        let back = FitParams::from_bytes(&bytes).unwrap();

        assert_eq!(back.num_features, params.num_features);
        assert_eq!(back.theta, params.theta);
        assert_eq!(back.cost, params.cost);
        assert_eq!(back.alpha, params.alpha);
        assert_eq!(back.iters, params.iters);
        assert_eq!(back.mean, params.mean);
        assert_eq!(back.std, params.std);
    }

    #[test]
    fn from_bytes_rejects_truncated_input() {
        let mut bytes = sample_params().to_bytes().unwrap();
        bytes.truncate(bytes.len() / 2);
        assert!(FitParams::from_bytes(&bytes).is_err());
    }
}

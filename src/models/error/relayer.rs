use thiserror::Error;

use super::ApiError;
use crate::services::{ProviderError, SignerError};

/// Failures raised while materializing or relaying a submission.
///
/// `Decode`, `Parse` and `Timestamp` are caused by the caller's input and map
/// to 400 responses; everything else is a pipeline failure reported as an
/// opaque 500 with the cause logged server-side.
#[derive(Error, Debug)]
pub enum RelayerError {
    #[error("Failed to decode {0}")]
    Decode(String),

    #[error("Failed to parse proof integer {0}")]
    Parse(String),

    #[error("Timestamp not representable: {0}")]
    Timestamp(String),

    #[error("Simulation failed: {0}")]
    Simulation(String),

    #[error("Nonce conflict persisted after resynchronization: {0}")]
    NonceConflict(String),

    #[error("Nonce resynchronization failed: {0}")]
    Recovery(#[source] ProviderError),

    #[error("Execution client error: {0}")]
    Network(#[from] ProviderError),

    #[error("Signing failed: {0}")]
    Signing(#[from] SignerError),
}

impl From<RelayerError> for ApiError {
    fn from(error: RelayerError) -> Self {
        match error {
            RelayerError::Decode(_) | RelayerError::Parse(_) | RelayerError::Timestamp(_) => {
                ApiError::BadRequest(error.to_string())
            }
            RelayerError::Simulation(_)
            | RelayerError::NonceConflict(_)
            | RelayerError::Recovery(_)
            | RelayerError::Network(_)
            | RelayerError::Signing(_) => ApiError::InternalError,
        }
    }
}

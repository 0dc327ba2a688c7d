//! Signing service for the relayer account.
//!
//! The only supported backend is a local in-process key; the signing seam is
//! kept narrow so the rest of the pipeline never touches key material.
use serde::Serialize;
use thiserror::Error;

mod evm;
pub use evm::*;

#[derive(Error, Debug, Serialize)]
pub enum SignerError {
    #[error("Failed to sign transaction: {0}")]
    SigningError(String),

    #[error("Invalid key format: {0}")]
    KeyError(String),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
}

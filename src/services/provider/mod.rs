use alloy::transports::TransportError;
use serde::Serialize;
use thiserror::Error;

mod evm;
pub use evm::*;

#[derive(Error, Debug, Serialize)]
pub enum ProviderError {
    /// An RPC request was rejected or failed. The execution client's message
    /// is preserved verbatim; the relay pipeline classifies on it.
    #[error("RPC error: {0}")]
    RpcError(String),
    #[error("Network configuration error: {0}")]
    NetworkConfiguration(String),
}

impl From<TransportError> for ProviderError {
    fn from(err: TransportError) -> Self {
        ProviderError::RpcError(err.to_string())
    }
}

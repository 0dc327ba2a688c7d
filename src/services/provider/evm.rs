//! EVM provider for the execution client this service relays through.
//!
//! Wraps a single HTTP JSON-RPC endpoint and exposes exactly the calls the
//! relay pipeline needs: gas pricing, gas estimation, dry runs, pending
//! transaction counts and raw sends.

use std::time::Duration;

use alloy::{
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::{client::ClientBuilder, types::TransactionRequest},
    transports::http::{Client, Http},
};
use async_trait::async_trait;
use reqwest::ClientBuilder as ReqwestClientBuilder;

#[cfg(test)]
use mockall::automock;

use super::ProviderError;

/// Provider implementation backed by an EVM-compatible execution client.
#[derive(Clone)]
pub struct EvmProvider {
    provider: RootProvider<Http<Client>>,
}

/// Trait defining the execution layer interactions used by the relay
/// pipeline.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait EvmProviderTrait: Send + Sync {
    /// Gets the current gas price from the network.
    async fn get_gas_price(&self) -> Result<u128, ProviderError>;

    /// Estimates the gas required for a transaction.
    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, ProviderError>;

    /// Gets the pending transaction count (next nonce) for an address.
    async fn get_transaction_count(&self, address: Address) -> Result<u64, ProviderError>;

    /// Executes a call without submitting it, returning the call's output.
    async fn call_contract(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError>;

    /// Broadcasts a raw signed transaction and returns its hash.
    async fn send_raw_transaction(&self, tx: &[u8]) -> Result<String, ProviderError>;
}

impl EvmProvider {
    /// Creates a new provider for the given JSON-RPC URL.
    ///
    /// The connection is lazy; a misconfigured URL fails here, an unreachable
    /// endpoint fails on first use.
    pub fn new(url: &str, timeout_seconds: u64) -> Result<Self, ProviderError> {
        let rpc_url = url.parse().map_err(|e| {
            ProviderError::NetworkConfiguration(format!("Invalid URL format: {}", e))
        })?;

        let client = ReqwestClientBuilder::default()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                ProviderError::NetworkConfiguration(format!("Failed to build HTTP client: {}", e))
            })?;

        let mut transport = Http::new(rpc_url);
        transport.set_client(client);

        let is_local = transport.guess_local();
        let client = ClientBuilder::default().transport(transport, is_local);

        Ok(Self {
            provider: ProviderBuilder::new().on_client(client),
        })
    }
}

impl AsRef<EvmProvider> for EvmProvider {
    fn as_ref(&self) -> &EvmProvider {
        self
    }
}

#[async_trait]
impl EvmProviderTrait for EvmProvider {
    async fn get_gas_price(&self) -> Result<u128, ProviderError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(ProviderError::from)
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, ProviderError> {
        self.provider
            .estimate_gas(tx)
            .await
            .map_err(ProviderError::from)
    }

    async fn get_transaction_count(&self, address: Address) -> Result<u64, ProviderError> {
        self.provider
            .get_transaction_count(address)
            .pending()
            .await
            .map_err(ProviderError::from)
    }

    async fn call_contract(&self, tx: &TransactionRequest) -> Result<Bytes, ProviderError> {
        self.provider.call(tx).await.map_err(ProviderError::from)
    }

    async fn send_raw_transaction(&self, tx: &[u8]) -> Result<String, ProviderError> {
        let pending_tx = self
            .provider
            .send_raw_transaction(tx)
            .await
            .map_err(ProviderError::from)?;

        Ok(pending_tx.tx_hash().to_string())
    }
}

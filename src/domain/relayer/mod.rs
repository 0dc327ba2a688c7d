//! # Relayer Domain Module
//!
//! Core submission pipeline for the relayer service. Every inbound request
//! runs the same sequence against the execution layer: simulate the call,
//! price it, allocate a nonce, sign and broadcast. A send rejected over a
//! nonce conflict is retried exactly once after resynchronizing the counter
//! from the chain; every other failure is terminal for the submission.
use std::sync::Arc;

use crate::{
    constants::NONCE_CONFLICT_SIGNATURES,
    domain::RegistrationMaterial,
    models::{PendingOperation, RelayerAccount, RelayerError},
    services::{
        AccountSequencer, EvmProviderTrait, EvmSigner, ProviderError, RegistrationContract,
    },
};
use alloy::primitives::Bytes;
use log::{info, warn};

/// Returns true when an execution layer failure reports a nonce conflict.
///
/// Classification is a substring heuristic over the node's error text since
/// the wire format carries no structured cause.
pub fn is_nonce_conflict(error: &ProviderError) -> bool {
    let message = error.to_string().to_lowercase();

    NONCE_CONFLICT_SIGNATURES
        .iter()
        .any(|signature| message.contains(signature))
}

pub struct Relayer<P: EvmProviderTrait> {
    account: RelayerAccount,
    provider: Arc<P>,
    signer: EvmSigner,
    sequencer: Arc<AccountSequencer>,
    contract: RegistrationContract,
}

impl<P: EvmProviderTrait> Relayer<P> {
    pub fn new(
        account: RelayerAccount,
        provider: Arc<P>,
        signer: EvmSigner,
        sequencer: Arc<AccountSequencer>,
        contract: RegistrationContract,
    ) -> Self {
        Self {
            account,
            provider,
            signer,
            sequencer,
            contract,
        }
    }

    pub fn account(&self) -> RelayerAccount {
        self.account
    }

    /// Submits a registration built from decoded submission material.
    pub async fn register(&self, material: &RegistrationMaterial) -> Result<String, RelayerError> {
        let calldata = self.contract.register_calldata(material);

        self.submit(PendingOperation::call(self.contract.address(), calldata))
            .await
    }

    /// Relays an opaque pre-built payload as a contract creation.
    pub async fn relay_payload(&self, tx_data: Bytes) -> Result<String, RelayerError> {
        self.submit(PendingOperation::create(tx_data)).await
    }

    /// Runs one operation through simulate, price, sign and send.
    ///
    /// The account lock is held from before the dry run until the final send
    /// attempt resolves. Dropping the guard without a commit leaves the nonce
    /// counter untouched, so a failed or canceled submission burns no nonce.
    async fn submit(&self, operation: PendingOperation) -> Result<String, RelayerError> {
        let mut guard = self.sequencer.lock().await;

        let request = operation.as_transaction_request(self.account.address);
        self.provider
            .call_contract(&request)
            .await
            .map_err(|e| RelayerError::Simulation(e.to_string()))?;

        let gas_price = self.provider.get_gas_price().await?;
        let gas_limit = self.provider.estimate_gas(&request).await?;
        let operation = operation.with_pricing(gas_price, gas_limit);

        let signed = self
            .signer
            .sign_operation(
                &operation.clone().with_nonce(guard.allocate()),
                self.account.chain_id,
            )
            .await?;

        match self.provider.send_raw_transaction(&signed.raw).await {
            Ok(tx_hash) => {
                guard.commit();
                info!(
                    "Submitted transaction {} for relayer {}",
                    tx_hash, self.account.address
                );
                return Ok(tx_hash);
            }
            Err(error) if is_nonce_conflict(&error) => {
                warn!(
                    "Nonce conflict for relayer {}: {}. Resynchronizing and retrying once",
                    self.account.address, error
                );
            }
            Err(error) => return Err(RelayerError::Network(error)),
        }

        let fresh_nonce = guard
            .resynchronize(self.provider.as_ref())
            .await
            .map_err(RelayerError::Recovery)?;

        let signed = self
            .signer
            .sign_operation(&operation.with_nonce(fresh_nonce), self.account.chain_id)
            .await?;

        match self.provider.send_raw_transaction(&signed.raw).await {
            Ok(tx_hash) => {
                guard.commit();
                info!(
                    "Submitted transaction {} for relayer {} after nonce resynchronization",
                    tx_hash, self.account.address
                );
                Ok(tx_hash)
            }
            Err(error) if is_nonce_conflict(&error) => {
                Err(RelayerError::NonceConflict(error.to_string()))
            }
            Err(error) => Err(RelayerError::Network(error)),
        }
    }
}

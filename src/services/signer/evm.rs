//! Local EVM signer for the relayer account.
use alloy::{
    consensus::{SignableTransaction, TxLegacy},
    network::TxSigner,
    primitives::{Address, FixedBytes, U256},
    signers::{k256::ecdsa::SigningKey, local::LocalSigner as AlloyLocalSignerClient},
};
use zeroize::Zeroizing;

use super::SignerError;
use crate::models::{PendingOperation, SecretString, SignedEvmTransaction};

pub struct EvmSigner {
    local_signer_client: AlloyLocalSignerClient<SigningKey>,
}

impl EvmSigner {
    /// Builds a signer from a 32-byte hex-encoded key, with or without a
    /// `0x` prefix.
    pub fn from_secret(key: &SecretString) -> Result<Self, SignerError> {
        let raw_key = key
            .as_str(|s| hex::decode(s.trim().trim_start_matches("0x")))
            .map(Zeroizing::new)
            .map_err(|e| SignerError::KeyError(format!("not valid hex: {}", e)))?;

        if raw_key.len() != 32 {
            return Err(SignerError::KeyError(format!(
                "expected a 32-byte key, got {} bytes",
                raw_key.len()
            )));
        }

        let key_bytes = FixedBytes::from_slice(&raw_key);
        let local_signer_client = AlloyLocalSignerClient::from_bytes(&key_bytes)
            .map_err(|e| SignerError::KeyError(format!("failed to create signer: {}", e)))?;

        Ok(Self {
            local_signer_client,
        })
    }

    /// The address of the account this signer controls.
    pub fn address(&self) -> Address {
        self.local_signer_client.address()
    }

    /// Signs a fully priced operation as an EIP-155 legacy transaction and
    /// returns the raw RLP encoding together with the transaction hash.
    pub async fn sign_operation(
        &self,
        operation: &PendingOperation,
        chain_id: u64,
    ) -> Result<SignedEvmTransaction, SignerError> {
        let nonce = operation
            .nonce
            .ok_or_else(|| SignerError::InvalidTransaction("no nonce allocated".to_string()))?;
        let gas_price = operation
            .gas_price
            .ok_or_else(|| SignerError::InvalidTransaction("no gas price set".to_string()))?;
        let gas_limit = operation
            .gas_limit
            .ok_or_else(|| SignerError::InvalidTransaction("no gas limit set".to_string()))?;

        let mut unsigned_tx = TxLegacy {
            chain_id: Some(chain_id),
            nonce,
            gas_price,
            gas_limit,
            to: operation.kind(),
            value: U256::ZERO,
            input: operation.data.clone(),
        };

        let signature = self
            .local_signer_client
            .sign_transaction(&mut unsigned_tx)
            .await
            .map_err(|e| SignerError::SigningError(format!("Failed to sign transaction: {e}")))?;

        let signed_tx = unsigned_tx.into_signed(signature);

        let mut raw = Vec::with_capacity(signed_tx.rlp_encoded_length());
        signed_tx.rlp_encode(&mut raw);

        Ok(SignedEvmTransaction {
            hash: signed_tx.hash().to_string(),
            raw,
        })
    }
}

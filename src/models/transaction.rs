//! Relayed transaction data types.
use alloy::{
    primitives::{Address, Bytes, TxKind, U256},
    rpc::types::{TransactionInput, TransactionRequest},
};

/// An operation accepted for relaying, before it is signed.
///
/// Gas parameters and the nonce are filled in by the pipeline; `to = None`
/// relays the payload as a contract creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    pub to: Option<Address>,
    pub data: Bytes,
    pub gas_price: Option<u128>,
    pub gas_limit: Option<u64>,
    pub nonce: Option<u64>,
}

impl PendingOperation {
    pub fn call(to: Address, data: Bytes) -> Self {
        Self {
            to: Some(to),
            data,
            gas_price: None,
            gas_limit: None,
            nonce: None,
        }
    }

    pub fn create(data: Bytes) -> Self {
        Self {
            to: None,
            data,
            gas_price: None,
            gas_limit: None,
            nonce: None,
        }
    }

    pub fn with_pricing(mut self, gas_price: u128, gas_limit: u64) -> Self {
        self.gas_price = Some(gas_price);
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn kind(&self) -> TxKind {
        match self.to {
            Some(address) => TxKind::Call(address),
            None => TxKind::Create,
        }
    }

    /// Request shape used for `eth_call` dry runs and gas estimation.
    pub fn as_transaction_request(&self, from: Address) -> TransactionRequest {
        TransactionRequest {
            from: Some(from),
            to: Some(self.kind()),
            input: TransactionInput::new(self.data.clone()),
            value: Some(U256::ZERO),
            ..Default::default()
        }
    }
}

/// A signed transaction ready for broadcast.
#[derive(Debug, Clone)]
pub struct SignedEvmTransaction {
    /// 0x-prefixed transaction hash.
    pub hash: String,
    /// Raw RLP encoding submitted via `eth_sendRawTransaction`.
    pub raw: Vec<u8>,
}

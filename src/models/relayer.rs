use alloy::primitives::Address;

/// Identity of the funded account this service relays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayerAccount {
    pub address: Address,
    pub chain_id: u64,
}

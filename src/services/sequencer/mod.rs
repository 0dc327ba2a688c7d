//! In-memory nonce sequencing for the relayer account.
//!
//! The execution layer admits transactions from an account strictly in nonce
//! order, so every submission must sign against a fresh nonce and commit it
//! only once the send is accepted. `AccountSequencer` owns the account's
//! next-nonce counter; `SequencerGuard` is the exclusive handle a submission
//! holds from dry run through send, which makes it impossible for two
//! submissions to sign against the same nonce.
use alloy::primitives::Address;
use tokio::sync::{Mutex, MutexGuard};

use super::provider::{EvmProviderTrait, ProviderError};

pub struct AccountSequencer {
    address: Address,
    next_nonce: Mutex<u64>,
}

impl AccountSequencer {
    /// Creates a sequencer seeded with the account's current transaction
    /// count.
    pub fn new(address: Address, initial_nonce: u64) -> Self {
        Self {
            address,
            next_nonce: Mutex::new(initial_nonce),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Acquires the exclusive guard for this account. The caller holds it
    /// across the whole simulate-sign-send span of one submission.
    pub async fn lock(&self) -> SequencerGuard<'_> {
        SequencerGuard {
            address: self.address,
            next_nonce: self.next_nonce.lock().await,
        }
    }
}

/// Exclusive handle over the account's nonce counter.
///
/// Dropping the guard without committing leaves the counter untouched, so an
/// abandoned submission never burns a nonce.
pub struct SequencerGuard<'a> {
    address: Address,
    next_nonce: MutexGuard<'a, u64>,
}

impl SequencerGuard<'_> {
    /// Reads the nonce this submission will sign with. Repeated calls return
    /// the same value until `commit` advances it.
    pub fn allocate(&self) -> u64 {
        *self.next_nonce
    }

    /// Marks the allocated nonce as consumed. Called only after the
    /// execution layer accepted the send.
    pub fn commit(&mut self) {
        *self.next_nonce += 1;
    }

    /// Overwrites the counter from the execution layer's pending transaction
    /// count and returns the fresh value. Used when a send reported a nonce
    /// conflict, meaning the local counter has drifted.
    pub async fn resynchronize<P>(&mut self, provider: &P) -> Result<u64, ProviderError>
    where
        P: EvmProviderTrait + ?Sized,
    {
        let count = provider.get_transaction_count(self.address).await?;
        *self.next_nonce = count;
        Ok(count)
    }
}

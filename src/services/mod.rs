//! # Services Module
//!
//! Implements the execution-layer integrations the relayer talks through.

mod contract;
pub use contract::*;

mod provider;
pub use provider::*;

mod sequencer;
pub use sequencer::*;

mod signer;
pub use signer::*;

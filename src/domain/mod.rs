//! # Domain Module
//!
//! Core domain logic for the relayer service, implementing:
//!
//! * Submission decoding and validation
//! * Calendar date packing for the registration contract
//! * The simulate, sign and send pipeline with nonce recovery

mod proof;
pub use proof::*;

mod relayer;
pub use relayer::*;

mod timestamp;
pub use timestamp::*;

//! Constants governing how relayed transactions are built and retried.

/// Substrings that identify a nonce admission failure in an execution
/// client's error text. Geth, Erigon and Nethermind word these failures
/// differently ("nonce too low", "invalid nonce", "already known"), so
/// classification matches the stable fragments, case-insensitively.
pub const NONCE_CONFLICT_SIGNATURES: [&str; 2] = ["nonce", "already known"];

/// A conflicting send is retried after resynchronization at most this many
/// times before the submission fails.
pub const MAX_NONCE_RETRIES: u32 = 1;

/// Deadline forwarded to the registration contract. The contract treats zero
/// as "no deadline".
pub const REGISTRATION_NO_DEADLINE: u64 = 0;

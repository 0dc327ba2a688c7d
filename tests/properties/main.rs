//! Property-based tests for the registration relayer.

mod logging;
mod timestamp;

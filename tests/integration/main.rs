//! Integration tests for the registration relayer.

mod config;
mod health;
mod logging;

//! Registration Relayer Library
//!
//! This library provides functionality for relaying identity registration
//! transactions to an EVM chain from a single funded account. It includes:
//!
//! - Configuration management through JSON files
//! - Submission decoding into contract-ready call material
//! - Nonce-serialized transaction signing and broadcasting
//! - Automatic nonce resynchronization after conflicting sends
//!
//! # Module Structure
//!
//! - `api`: HTTP endpoint definitions and request handling
//! - `config`: Configuration management
//! - `constants`: Shared constants for the submission pipeline
//! - `domain`: Submission decoding and the relay pipeline
//! - `init`: Application state wiring at startup
//! - `logging`: Logging setup
//! - `models`: Data structures for requests, responses and errors
//! - `openapi`: OpenAPI document for the relay surface
//! - `services`: Execution layer client, signer and nonce sequencer

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod init;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod services;

pub use models::{ApiError, AppState};

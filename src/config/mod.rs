//! Configuration system for the registration relayer.
//!
//! This module handles:
//! - Loading and parsing the network config file
//! - Environment variable integration
//! - Configuration validation
//! - Type-safe config access
mod server_config;
pub use server_config::*;

mod config_file;
pub use config_file::*;

//! Network configuration file loading and validation.
//!
//! The file is JSON with a single `network` section naming the execution
//! layer endpoint, the chain id, the registration contract and the relayer
//! signing key. The key can be inlined (`type: plain`) or resolved from an
//! environment variable (`type: env`).
use std::fs;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{PlainOrEnvValue, PlainOrEnvValueError};

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid config file: {0}")]
    InvalidFormat(String),
    #[error("Failed to resolve private key: {0}")]
    KeyResolution(#[from] PlainOrEnvValueError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
}

/// Execution layer and contract settings for the relayed network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// HTTP JSON-RPC endpoint of the execution client.
    pub rpc_url: String,
    /// EIP-155 chain id the relayer signs for.
    pub chain_id: u64,
    /// Address of the registration contract.
    pub registration_address: String,
    /// 32-byte relayer signing key, hex-encoded.
    pub private_key: PlainOrEnvValue,
}

impl NetworkConfig {
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.rpc_url.is_empty() {
            return Err(ConfigFileError::MissingField("network.rpc_url".into()));
        }
        if self.chain_id == 0 {
            return Err(ConfigFileError::InvalidFormat(
                "network.chain_id must be non-zero".into(),
            ));
        }
        if self.registration_address.parse::<Address>().is_err() {
            return Err(ConfigFileError::InvalidFormat(format!(
                "network.registration_address is not a valid address: {}",
                self.registration_address
            )));
        }

        let key = self.private_key.get_value()?;
        // 32 bytes hex-encoded, with or without a 0x prefix
        if !key.has_minimum_length(64) {
            return Err(ConfigFileError::InvalidFormat(
                "network.private_key must be a 32-byte hex string".into(),
            ));
        }

        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        self.network.validate()
    }
}

/// Reads, parses and validates the configuration file at the given path.
pub fn load_config(config_file_path: &str) -> Result<Config, ConfigFileError> {
    let config_str = fs::read_to_string(config_file_path)?;
    let config: Config = serde_json::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}

//! Integration tests for configuration loading.
//!
//! These tests exercise `load_config` against real files on disk, including
//! signing key resolution through the environment.
//!   Refer to `src/config/config_file.rs` for more details.
use registration_relayer::config::{load_config, ConfigFileError};
use std::{env, fs, sync::Mutex};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).expect("Failed to write config file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_load_valid_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "network": {
                "rpc_url": "http://localhost:8545",
                "chain_id": 11155111,
                "registration_address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "private_key": {
                    "type": "plain",
                    "value": "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                }
            }
        }"#,
    );

    let config = load_config(&path).unwrap();

    assert_eq!(config.network.chain_id, 11155111);
    assert_eq!(config.network.rpc_url, "http://localhost:8545");
    let key = config.network.private_key.get_value().unwrap();
    assert!(key.has_minimum_length(64));
}

#[test]
fn test_load_config_resolves_key_from_environment() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    env::set_var(
        "INTEGRATION_RELAYER_KEY",
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    );

    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "network": {
                "rpc_url": "http://localhost:8545",
                "chain_id": 31337,
                "registration_address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "private_key": { "type": "env", "value": "INTEGRATION_RELAYER_KEY" }
            }
        }"#,
    );

    let config = load_config(&path).unwrap();
    let key = config.network.private_key.get_value().unwrap();

    key.as_str(|value| assert!(value.starts_with("ac0974")));

    env::remove_var("INTEGRATION_RELAYER_KEY");
}

#[test]
fn test_load_config_rejects_zero_chain_id() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "network": {
                "rpc_url": "http://localhost:8545",
                "chain_id": 0,
                "registration_address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "private_key": { "type": "plain", "value": "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80" }
            }
        }"#,
    );

    assert!(matches!(
        load_config(&path),
        Err(ConfigFileError::InvalidFormat(_))
    ));
}

#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/config.json");

    assert!(matches!(result, Err(ConfigFileError::IoError(_))));
}

#[test]
fn test_load_config_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    assert!(matches!(
        load_config(&path),
        Err(ConfigFileError::JsonError(_))
    ));
}

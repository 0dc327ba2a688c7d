//! Application state initialization
//!
//! Builds the provider, signer and sequencer from configuration and wires
//! them into the shared application state. The nonce counter is seeded from
//! the chain's pending transaction count at startup.
use crate::{
    config::{Config, ServerConfig},
    domain::Relayer,
    models::{AppState, RelayerAccount},
    services::{AccountSequencer, EvmProvider, EvmProviderTrait, EvmSigner, RegistrationContract},
};
use actix_web::web;
use alloy::primitives::Address;
use color_eyre::Result;
use log::info;
use std::sync::Arc;

/// Initializes application state
///
/// # Returns
///
/// * `Result<web::ThinData<AppState>>` - Initialized application state
///
/// # Errors
///
/// Returns error if:
/// - The signing key or contract address cannot be parsed
/// - The execution layer is unreachable while seeding the nonce counter
pub async fn initialize_app_state(
    server_config: &ServerConfig,
    config: &Config,
) -> Result<web::ThinData<AppState>> {
    let network = &config.network;

    let provider = Arc::new(EvmProvider::new(
        &network.rpc_url,
        server_config.rpc_timeout_seconds(),
    )?);

    let private_key = network.private_key.get_value()?;
    let signer = EvmSigner::from_secret(&private_key)?;

    let account = RelayerAccount {
        address: signer.address(),
        chain_id: network.chain_id,
    };

    let registration_address = network
        .registration_address
        .parse::<Address>()
        .map_err(|e| eyre::eyre!("Invalid registration contract address: {}", e))?;

    let initial_nonce = provider.get_transaction_count(account.address).await?;
    info!(
        "Relayer account {} starting at nonce {}",
        account.address, initial_nonce
    );

    let sequencer = Arc::new(AccountSequencer::new(account.address, initial_nonce));
    let relayer = Relayer::new(
        account,
        provider,
        signer,
        sequencer,
        RegistrationContract::new(registration_address),
    );

    Ok(web::ThinData(AppState {
        relayer: Arc::new(relayer),
    }))
}

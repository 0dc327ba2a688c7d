//! # Registration Relayer
//!
//! An HTTP relay service that submits identity registration transactions to
//! an EVM chain from a single nonce-synchronized account.
//!
//! ## Features
//!
//! - Registration submission decoding and on-chain relay
//! - Opaque account creation payload relay
//! - Dry-run simulation before any nonce is consumed
//! - Automatic nonce recovery after conflicting sends
//!
//! ## Architecture
//!
//! The service is built using Actix-web and provides:
//! - HTTP endpoints for submission relay
//! - A single shared signing account serialized by an async lock
//! - JSON file plus environment based configuration
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use registration_relayer::{
    api,
    config::{self, Config, ServerConfig},
    init::initialize_app_state,
    logging::setup_logging,
    models::ApiError,
};

fn load_config_file(config_file_path: &str) -> Result<Config> {
    config::load_config(config_file_path).wrap_err("Failed to load config file")
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging();

    let server_config = ServerConfig::from_env();
    let config = load_config_file(&server_config.config_file_path)?;

    let app_state = initialize_app_state(&server_config, &config).await?;

    info!(
        "Starting server on {}:{}",
        server_config.host, server_config.port
    );
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                // Body deserialization failures are client errors and render
                // as the same problem document as field decode failures.
                ApiError::BadRequest(err.to_string()).into()
            }))
            .app_data(app_state.clone())
            .configure(api::routes::configure_routes)
    })
    .bind((server_config.host.as_str(), server_config.port))
    .wrap_err_with(|| {
        format!(
            "Failed to bind server to {}:{}",
            server_config.host, server_config.port
        )
    })?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}

//! # Relayer Controller
//!
//! Handles HTTP endpoints for the relay surface:
//! - Registering a decoded identity submission on chain
//! - Relaying an opaque account creation payload
//!
//! Input decoding happens here so malformed submissions are rejected as bad
//! requests before the pipeline touches the chain.
use crate::{
    domain::{decode_bytes, RegistrationMaterial},
    models::{
        ApiError, AppState, CreateAccountRequest, RegisterRequest, ResourceResponse, TxResource,
    },
};
use actix_web::{web, HttpResponse};
use log::error;

pub async fn register(
    request: RegisterRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let material = RegistrationMaterial::from_request(&request.data)?;

    let tx_hash = state
        .relayer()
        .register(&material)
        .await
        .map_err(|error| {
            error!("Registration submission failed: {}", error);
            ApiError::from(error)
        })?;

    Ok(HttpResponse::Ok().json(ResourceResponse::new(TxResource::new(tx_hash))))
}

pub async fn create_account(
    request: CreateAccountRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let tx_data = decode_bytes("tx_data", &request.data.tx_data)?;

    let tx_hash = state
        .relayer()
        .relay_payload(tx_data.into())
        .await
        .map_err(|error| {
            error!("Account creation relay failed: {}", error);
            ApiError::from(error)
        })?;

    Ok(HttpResponse::Ok().json(ResourceResponse::new(TxResource::new(tx_hash))))
}

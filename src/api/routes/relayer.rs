//! This module defines the HTTP routes for the relay endpoints.
//! Paths are fixed for compatibility with existing integrators, so the two
//! operations live under separate versioned scopes. The routes delegate to
//! the relayer controller for decoding and submission.
use crate::{
    api::controllers::relayer,
    models::{
        AppState, CreateAccountRequest, ProblemDocument, RegisterRequest, ResourceResponse,
        TxResource,
    },
};
use actix_web::{post, web, Responder};

/// Registers an identity submission on chain through the relayer account.
#[utoipa::path(
    post,
    path = "/integrations/registration-relayer/v1/register",
    tag = "Registration",
    operation_id = "register",
    request_body = RegisterRequest,
    responses(
        (
            status = 200,
            description = "Submission relayed, transaction broadcast",
            body = ResourceResponse<TxResource>
        ),
        (
            status = 400,
            description = "Malformed submission field",
            body = ProblemDocument
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ProblemDocument
        ),
    )
)]
#[post("/register")]
pub async fn register(
    request: web::Json<RegisterRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    relayer::register(request.into_inner(), data).await
}

/// Relays a pre-built account creation payload.
#[utoipa::path(
    post,
    path = "/integrations/relayer/v1/create-account",
    tag = "Accounts",
    operation_id = "createAccount",
    request_body = CreateAccountRequest,
    responses(
        (
            status = 200,
            description = "Payload relayed, transaction broadcast",
            body = ResourceResponse<TxResource>
        ),
        (
            status = 400,
            description = "Malformed payload",
            body = ProblemDocument
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ProblemDocument
        ),
    )
)]
#[post("/create-account")]
pub async fn create_account(
    request: web::Json<CreateAccountRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    relayer::create_account(request.into_inner(), data).await
}

/// Initializes the registration scope routes.
pub fn init_registration(cfg: &mut web::ServiceConfig) {
    cfg.service(register);
}

/// Initializes the account relay scope routes.
pub fn init_accounts(cfg: &mut web::ServiceConfig) {
    cfg.service(create_account);
}

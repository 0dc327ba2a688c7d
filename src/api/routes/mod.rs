//! # API Routes Module
//!
//! Configures HTTP routes for the relayer service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/integrations/registration-relayer/v1/register` - Registration relay
//! * `/integrations/relayer/v1/create-account` - Account creation relay

pub mod health;
pub mod relayer;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .service(
            web::scope("/integrations/registration-relayer/v1")
                .configure(relayer::init_registration),
        )
        .service(web::scope("/integrations/relayer/v1").configure(relayer::init_accounts));
}

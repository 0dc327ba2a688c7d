use crate::{
    api::routes::{health, relayer},
    models,
};
use utoipa::OpenApi;

/// # OpenAPI Specification Generator
///
/// Describes the relay surface: the registration and account creation
/// endpoints plus the health check.
#[derive(OpenApi)]
#[openapi(
    tags(
      (name = "Registration", description = "Relays decoded identity submissions to the registration contract through the service's funded account."),
      (name = "Accounts", description = "Relays pre-built account creation payloads on behalf of callers."),
      (name = "Health", description = "Health is responsible for showing the health of the service.")
    ),
    info(
        description = "Registration Relayer API",
        version = "1.0.0",
        title = "Registration Relayer API"
    ),
    paths(
        relayer::register,
        relayer::create_account,
        health::health,
    ),
    components(schemas(
        models::RegisterRequest,
        models::CreateAccountRequest,
        models::TxResource,
        models::TxAttributes,
        models::Problem,
        models::ProblemDocument,
    ))
)]
pub struct ApiDoc;

//! Integration tests for route mounting.
//!
//! Routes are configured exactly as the production server does it, through
//! `configure_routes`, so path regressions show up here.
use actix_web::{http::StatusCode, test, App};
use registration_relayer::api::routes::configure_routes;

#[actix_web::test]
async fn test_health_endpoint_through_route_config() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn test_register_route_is_mounted() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/integrations/registration-relayer/v1/register")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Malformed body, but the route resolves.
    assert_ne!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_create_account_route_is_mounted() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/integrations/relayer/v1/create-account")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_ne!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = test::init_service(App::new().configure(configure_routes)).await;

    let req = test::TestRequest::get()
        .uri("/integrations/registration-relayer/v2/register")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

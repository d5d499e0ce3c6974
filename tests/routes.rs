use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pushkind_crm_mock::API_SCOPE;
use pushkind_crm_mock::mock::MockRouter;
use pushkind_crm_mock::repository::FixtureRepository;
use pushkind_crm_mock::routes::mock::intercept;

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .service(
                    web::scope(API_SCOPE)
                        .default_service(web::to(intercept::<FixtureRepository>)),
                )
                .app_data(web::Data::new(MockRouter::new(
                    FixtureRepository::seeded(99),
                    Duration::ZERO,
                ))),
        )
        .await
    };
}

#[actix_web::test]
async fn test_get_customer_by_id() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/customers/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["type"], "business");
}

#[actix_web::test]
async fn test_missing_customer_is_not_found_envelope() {
    let app = app!();
    let req = test::TestRequest::get().uri("/api/customers/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_customers_query_string_is_forwarded() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/api/customers?page=3&perPage=10")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["pagination"]["page"], 3);
    assert_eq!(body["pagination"]["perPage"], 10);
}

#[actix_web::test]
async fn test_create_customer_returns_created() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({"name": "Bäckerei Lorenz", "type": "business", "city": "Bonn"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 26);
    assert_eq!(body["data"]["status"], "lead");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/customers")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_login_and_me() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "demo", "password": "demo"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert!(token.starts_with("mock-jwt-token-"));

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let app = app!();
    for req in [
        test::TestRequest::get().uri("/api/offers").to_request(),
        test::TestRequest::patch().uri("/api/customers/1").to_request(),
        test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/customers")
            .to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

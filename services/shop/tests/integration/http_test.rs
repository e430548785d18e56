use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
use serde_json::{Value, json};

use tienda_shop::router::build_router;
use tienda_shop::state::AppState;

use crate::helpers::test_hasher;

fn server_over(db: DatabaseConnection) -> TestServer {
    let state = AppState {
        db,
        hasher: test_hasher(),
    };
    TestServer::new(build_router(state)).unwrap()
}

/// Router over a mock database with no queued results: any query that
/// reaches the store errors, so a 400 proves validation ran first.
fn server() -> TestServer {
    server_over(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
}

async fn assert_error_body(response: axum_test::TestResponse, status: StatusCode, kind: &str) {
    assert_eq!(response.status_code(), status);
    let body: Value = response.json();
    assert_eq!(body["kind"], kind);
    assert!(body["message"].is_string());
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_liveness() {
    let response = server().get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_not_ready_without_database() {
    let response = server_over(DatabaseConnection::Disconnected)
        .get("/readyz")
        .await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let response = server().get("/healthz").await;
    let request_id = response.header("x-request-id");
    assert!(!request_id.is_empty());

    let response = server()
        .get("/healthz")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("abc-123"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "abc-123");
}

// ── Validation before store access ───────────────────────────────────────────

#[tokio::test]
async fn should_reject_zero_quantity() {
    let response = server()
        .post("/cart/add")
        .json(&json!({
            "customer_id": 1,
            "cart_name": "default",
            "product_id": 7,
            "quantity": 0,
        }))
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "INVALID_QUANTITY").await;
}

#[tokio::test]
async fn should_reject_add_to_cart_with_missing_field() {
    let response = server()
        .post("/cart/add")
        .json(&json!({
            "customer_id": 1,
            "product_id": 7,
            "quantity": 1,
        }))
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "MISSING_DATA").await;
}

#[tokio::test]
async fn should_reject_malformed_json_body() {
    let response = server()
        .post("/cart/add")
        .json(&json!({ "customer_id": "one" }))
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "MISSING_DATA").await;
}

#[tokio::test]
async fn should_reject_unparsable_price_bound() {
    let response = server()
        .get("/cart/products")
        .add_query_param("min_price", "abc")
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "INVALID_PRICE").await;
}

#[tokio::test]
async fn should_require_customer_id_for_cart_listing() {
    let response = server().get("/cart/all").await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "MISSING_DATA").await;

    let response = server()
        .get("/cart/all")
        .add_query_param("customer_id", "abc")
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "INVALID_ID").await;
}

#[tokio::test]
async fn should_reject_non_numeric_customer_path() {
    let response = server().get("/customers/abc").await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "INVALID_ID").await;

    let response = server().get("/customers/0").await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "INVALID_ID").await;
}

#[tokio::test]
async fn should_reject_registration_with_bad_email() {
    let response = server()
        .post("/customers/reg")
        .json(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not-an-email",
            "password": "secret",
        }))
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "INVALID_EMAIL").await;
}

#[tokio::test]
async fn should_reject_login_without_password() {
    let response = server()
        .post("/customers/login")
        .json(&json!({ "email": "a@x.com" }))
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "MISSING_DATA").await;
}

#[tokio::test]
async fn should_reject_blank_address() {
    let response = server()
        .put("/customers/1/address")
        .json(&json!({ "address": "  " }))
        .await;
    assert_error_body(response, StatusCode::BAD_REQUEST, "MISSING_DATA").await;
}

// ── Store failures ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_store_failure_behind_internal_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".into())])
        .into_connection();
    let response = server_over(db).get("/cart/product").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INTERNAL");
    assert_eq!(body["message"], "internal error");
    assert!(!body["message"].as_str().unwrap().contains("connection reset"));
}

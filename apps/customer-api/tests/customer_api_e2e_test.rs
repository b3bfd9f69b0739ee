//! E2E Integration Tests for the Customer API
//!
//! Drives the router with the real reqwest address client against a wiremock
//! address service: HTTP API → service → address client → in-memory store.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use customer_api::{
    AddressClientConfig, AppState, CustomerService, HttpAddressClient, InMemoryCustomerStore,
    create_router,
};

// =============================================================================
// Helpers
// =============================================================================

async fn build_app(address_server: &MockServer) -> Router {
    let config = AddressClientConfig::new(format!("{}/address", address_server.uri()));
    let address_client = Arc::new(HttpAddressClient::new(&config).unwrap());
    let store = Arc::new(InMemoryCustomerStore::new());
    let service = CustomerService::new(store, address_client);
    service.seed_default().await.unwrap();

    create_router(AppState::new(Arc::new(service), "e2e"))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn create(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/customers")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn find(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/customers/{id}"))
        .body(Body::empty())
        .unwrap()
}

async fn address_service_returning(template: ResponseTemplate, calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/address"))
        .respond_with(template)
        .expect(calls)
        .mount(&server)
        .await;
    server
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn default_customer_is_present_at_startup() {
    let server = address_service_returning(ResponseTemplate::new(200), 0).await;
    let app = build_app(&server).await;

    let (status, body) = send(&app, find("1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "1",
            "firstName": "Bob",
            "lastName": "Brown",
            "address": "2 Coventry Street"
        })
    );
}

#[tokio::test]
async fn create_without_address_fetches_it_from_address_service() {
    let server = address_service_returning(
        ResponseTemplate::new(200).set_body_string("42 Example Street"),
        1,
    )
    .await;
    let app = build_app(&server).await;

    let (status, created) = send(
        &app,
        create(&json!({"id": "2", "firstName": "Ann", "lastName": "Lee"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["address"], "42 Example Street");

    let (status, found) = send(&app, find("2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);
}

#[tokio::test]
async fn create_with_address_does_not_call_address_service() {
    let server = address_service_returning(ResponseTemplate::new(200), 0).await;
    let app = build_app(&server).await;

    let (status, created) = send(
        &app,
        create(&json!({
            "id": "3",
            "firstName": "Ann",
            "lastName": "Lee",
            "address": "7 Supplied Lane"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["address"], "7 Supplied Lane");
}

#[tokio::test]
async fn address_service_error_stores_nothing() {
    let server = address_service_returning(ResponseTemplate::new(500), 1).await;
    let app = build_app(&server).await;

    let (status, error) = send(
        &app,
        create(&json!({"id": "4", "firstName": "Ann", "lastName": "Lee"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error["code"], "ADDRESS_SERVICE_ERROR");

    let (status, _) = send(&app, find("4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_create_keeps_original_record() {
    let server = address_service_returning(ResponseTemplate::new(200), 0).await;
    let app = build_app(&server).await;

    let (status, error) = send(
        &app,
        create(&json!({
            "id": "1",
            "firstName": "Alice",
            "lastName": "Smith"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "CUSTOMER_ALREADY_EXISTS");

    let (_, found) = send(&app, find("1")).await;
    assert_eq!(found["firstName"], "Bob");
    assert_eq!(found["address"], "2 Coventry Street");
}

//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the customer service.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use crate::application::ports::AddressPort;
use crate::application::services::CustomerService;
use crate::domain::customer::CustomerRepository;
use crate::domain::shared::CustomerId;
use crate::infrastructure::metrics::get_metrics_handle;

use super::request::CreateCustomerRequest;
use super::response::{ApiError, CustomerResponse, HealthResponse};

/// Application state shared across handlers.
pub struct AppState<R, A>
where
    R: CustomerRepository,
    A: AddressPort,
{
    /// Customer service.
    pub customers: Arc<CustomerService<R, A>>,
    /// Application version.
    pub version: String,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl<R, A> AppState<R, A>
where
    R: CustomerRepository,
    A: AddressPort,
{
    /// Create state for the given service, starting the uptime clock now.
    #[must_use]
    pub fn new(customers: Arc<CustomerService<R, A>>, version: impl Into<String>) -> Self {
        Self {
            customers,
            version: version.into(),
            started_at: Instant::now(),
        }
    }
}

impl<R, A> Clone for AppState<R, A>
where
    R: CustomerRepository,
    A: AddressPort,
{
    fn clone(&self) -> Self {
        Self {
            customers: Arc::clone(&self.customers),
            version: self.version.clone(),
            started_at: self.started_at,
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R, A>(state: AppState<R, A>) -> Router
where
    R: CustomerRepository + 'static,
    A: AddressPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/customers", post(create_customer))
        .route("/customers/{id}", get(find_customer))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<R, A>(State(state): State<AppState<R, A>>) -> impl IntoResponse
where
    R: CustomerRepository,
    A: AddressPort,
{
    let customers = match state.customers.repository().count().await {
        Ok(count) => count,
        Err(e) => return ApiError::from(e).into_response(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        current_time: Utc::now(),
        customers,
    })
    .into_response()
}

/// Prometheus metrics endpoint.
async fn metrics() -> impl IntoResponse {
    get_metrics_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            (
                StatusCode::OK,
                [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
                handle.render(),
            )
        },
    )
}

/// Create customer endpoint.
async fn create_customer<R, A>(
    State(state): State<AppState<R, A>>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CustomerRepository,
    A: AddressPort,
{
    let created = state.customers.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(&created))))
}

/// Find customer endpoint.
async fn find_customer<R, A>(
    State(state): State<AppState<R, A>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CustomerRepository,
    A: AddressPort,
{
    let customer_id = CustomerId::new(id);
    state
        .customers
        .find(&customer_id)
        .await?
        .map(|customer| Json(CustomerResponse::from(&customer)))
        .ok_or_else(|| ApiError::NotFound(customer_id.into_inner()))
}

//! HTTP response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::customer::{Customer, CustomerError};

/// A stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    /// Identifier.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Postal address.
    pub address: Option<String>,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            address: customer.address().map(str::to_string),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Server uptime in seconds.
    pub uptime_secs: u64,
    /// Current time.
    pub current_time: DateTime<Utc>,
    /// Number of stored customers.
    pub customers: usize,
}

/// API error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

/// Errors returned by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// No customer with the requested id.
    NotFound(String),
    /// A customer operation failed.
    Customer(CustomerError),
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        Self::Customer(err)
    }
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Customer(CustomerError::AlreadyExists { .. }) => StatusCode::CONFLICT,
            Self::Customer(CustomerError::AddressService { .. }) => StatusCode::BAD_GATEWAY,
            Self::Customer(CustomerError::Storage { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::NotFound(id) => ApiErrorResponse {
                code: "CUSTOMER_NOT_FOUND".to_string(),
                message: format!("Customer not found for id: {id}"),
            },
            Self::Customer(err) => ApiErrorResponse {
                code: err.code().to_string(),
                message: err.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

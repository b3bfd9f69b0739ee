// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Customer API - Customer Records Service
//!
//! Keeps customer records in memory, creates new customers (filling in a
//! missing postal address from the address service) and looks customers up
//! by identifier.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Customer record and persistence abstraction
//!   - `customer`: `Customer`, `CustomerError`, `CustomerRepository`
//!   - `shared`: Strongly-typed identifiers
//!
//! - **Application**: Orchestration and port definitions
//!   - `ports`: `AddressPort` (address lookup collaborator)
//!   - `services`: `CustomerService` (create, find, seed default)
//!
//! - **Infrastructure**: Adapters and external integrations
//!   - `persistence`: In-memory customer store
//!   - `address`: reqwest client for the address service
//!   - `http`: axum REST API
//!   - `config`: Environment-driven settings
//!   - `telemetry`: tracing subscriber and OpenTelemetry export
//!   - `metrics`: Prometheus recorder
//!
//! # Request Flow
//!
//! ```text
//! POST /customers ──► CustomerService::create ──► AddressPort (if no address)
//!                                │
//!                                └──► InMemoryCustomerStore
//! GET /customers/{id} ──► CustomerService::find ──► InMemoryCustomerStore
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Customer record with no external dependencies.
pub mod domain;

/// Application layer - Services and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain types
pub use domain::customer::{Customer, CustomerError, CustomerRepository};
pub use domain::shared::CustomerId;

// Application
pub use application::ports::{AddressError, AddressPort};
pub use application::services::CustomerService;

// Infrastructure
pub use infrastructure::address::{AddressClientConfig, HttpAddressClient};
pub use infrastructure::config::{ConfigError, ServerSettings, ServiceConfig};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::metrics::init_metrics;
pub use infrastructure::persistence::InMemoryCustomerStore;
pub use infrastructure::telemetry::{TelemetryConfig, TelemetryGuard, init as init_telemetry};

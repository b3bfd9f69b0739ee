//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain and application layers:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: In-memory customer store
//!   - `address/`: HTTP client for the address service
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers
//!
//! - **Cross-cutting**
//!   - `config/`: Environment-driven settings
//!   - `telemetry/`: Logging and trace export
//!   - `metrics/`: Prometheus recorder and metric helpers

pub mod address;
pub mod config;
pub mod http;
pub mod metrics;
pub mod persistence;
pub mod telemetry;

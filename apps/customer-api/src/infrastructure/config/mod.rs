//! Configuration Module
//!
//! Environment-driven configuration for the customer API.

mod settings;

pub use settings::{ConfigError, ServerSettings, ServiceConfig};

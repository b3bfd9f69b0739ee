//! Address Service Adapter
//!
//! Implements [`AddressPort`](crate::application::ports::AddressPort) over
//! HTTP: a GET to the configured URL whose response body is the address.

mod config;
mod http_client;

pub use config::{AddressClientConfig, DEFAULT_ADDRESS_SERVICE_URL};
pub use http_client::HttpAddressClient;

//! Address client configuration.

/// Address endpoint used when none is configured.
pub const DEFAULT_ADDRESS_SERVICE_URL: &str = "http://localhost:8082/address";

/// Configuration for the address service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressClientConfig {
    /// Full URL of the address endpoint.
    pub url: String,
}

impl AddressClientConfig {
    /// Create a configuration for the given endpoint.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for AddressClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_SERVICE_URL)
    }
}

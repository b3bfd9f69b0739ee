//! Service Configuration Settings
//!
//! Configuration types for the customer API, loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use crate::infrastructure::address::{AddressClientConfig, DEFAULT_ADDRESS_SERVICE_URL};

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address to bind the HTTP server to.
    pub bind_address: String,
    /// HTTP server port.
    pub http_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            http_port: 8080,
        }
    }
}

impl ServerSettings {
    /// Resolve the socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] if the bind address is not
    /// an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.bind_address.clone()))?;
        Ok(SocketAddr::new(ip, self.http_port))
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Address service client settings.
    pub address: AddressClientConfig,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerSettings::default();

        let server = ServerSettings {
            bind_address: lookup("CUSTOMER_API_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            http_port: parse_u16(lookup("CUSTOMER_API_HTTP_PORT"), defaults.http_port),
        };
        server.socket_addr()?;

        let url = lookup("ADDRESS_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_ADDRESS_SERVICE_URL.to_string());
        if url.trim().is_empty() {
            return Err(ConfigError::EmptyValue("ADDRESS_SERVICE_URL".to_string()));
        }

        Ok(Self {
            server,
            address: AddressClientConfig::new(url),
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// Bind address is not an IP address.
    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),
}

fn parse_u16(value: Option<String>, default: u16) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServiceConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(
            config.server.socket_addr().unwrap().to_string(),
            "0.0.0.0:8080"
        );
        assert_eq!(config.address.url, "http://localhost:8082/address");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("CUSTOMER_API_BIND_ADDRESS", "127.0.0.1"),
            ("CUSTOMER_API_HTTP_PORT", "9000"),
            ("ADDRESS_SERVICE_URL", "http://address:9999/lookup"),
        ])
        .unwrap();

        assert_eq!(
            config.server.socket_addr().unwrap().to_string(),
            "127.0.0.1:9000"
        );
        assert_eq!(config.address.url, "http://address:9999/lookup");
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        let config = config_from(&[("CUSTOMER_API_HTTP_PORT", "not-a-port")]).unwrap();
        assert_eq!(config.server.http_port, 8080);
    }

    #[test]
    fn invalid_bind_address_is_rejected() {
        let err = config_from(&[("CUSTOMER_API_BIND_ADDRESS", "localhost:80")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddress(_)));
    }

    #[test]
    fn empty_address_url_is_rejected() {
        let err = config_from(&[("ADDRESS_SERVICE_URL", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyValue(ref key) if key == "ADDRESS_SERVICE_URL"));
    }
}

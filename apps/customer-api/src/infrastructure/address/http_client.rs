//! HTTP client for the address service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::config::AddressClientConfig;
use crate::application::ports::{AddressError, AddressPort};

/// reqwest-backed [`AddressPort`].
///
/// One GET per call, no retries and no request timeout. Only a 200 response
/// is accepted; its body is decoded as UTF-8 and returned as-is.
#[derive(Debug, Clone)]
pub struct HttpAddressClient {
    client: Client,
    url: String,
}

impl HttpAddressClient {
    /// Create a new client from config.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Unreachable`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &AddressClientConfig) -> Result<Self, AddressError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AddressError::Unreachable {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Address endpoint this client calls.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AddressPort for HttpAddressClient {
    async fn fetch_address(&self) -> Result<String, AddressError> {
        tracing::debug!(url = %self.url, "Requesting address");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AddressError::Unreachable {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Address service returned non-200");
            return Err(AddressError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AddressError::InvalidBody {
                message: e.to_string(),
            })?;

        String::from_utf8(body.to_vec()).map_err(|e| AddressError::InvalidBody {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> HttpAddressClient {
        let config = AddressClientConfig::new(format!("{}/address", server.uri()));
        HttpAddressClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  42 Example Street\n"))
            .expect(1)
            .mount(&server)
            .await;

        let address = client_for(&server).fetch_address().await.unwrap();
        assert_eq!(address, "  42 Example Street\n");
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let address = client_for(&server).fetch_address().await.unwrap();
        assert_eq!(address, "");
    }

    #[tokio::test]
    async fn server_error_is_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_address().await.unwrap_err();
        assert_eq!(err, AddressError::UnexpectedStatus { status: 500 });
    }

    #[tokio::test]
    async fn other_success_codes_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_address().await.unwrap_err();
        assert_eq!(err, AddressError::UnexpectedStatus { status: 204 });
    }

    #[tokio::test]
    async fn invalid_utf8_is_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_address().await.unwrap_err();
        assert!(matches!(err, AddressError::InvalidBody { .. }));
    }

    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        let config = AddressClientConfig::new("http://127.0.0.1:1/address");
        let client = HttpAddressClient::new(&config).unwrap();

        let err = client.fetch_address().await.unwrap_err();
        assert!(matches!(err, AddressError::Unreachable { .. }));
    }
}

//! Address Port (Driven Port)
//!
//! Interface for looking up a postal address for a new customer.

use async_trait::async_trait;

use crate::domain::customer::CustomerError;

/// Address port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The request could not be completed (connect, DNS, reset).
    #[error("Unable to call address service: {message}")]
    Unreachable {
        /// Error details.
        message: String,
    },

    /// The service answered with something other than 200.
    #[error("Invalid response from address service: {status}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
    },

    /// The response body could not be read or was not UTF-8.
    #[error("Unable to extract customer address from response: {message}")]
    InvalidBody {
        /// Error details.
        message: String,
    },
}

impl From<AddressError> for CustomerError {
    fn from(err: AddressError) -> Self {
        Self::AddressService {
            message: err.to_string(),
        }
    }
}

/// Port for address lookups.
///
/// Calls are not retried and carry no timeout; a hanging address service
/// holds the caller until it answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressPort: Send + Sync {
    /// Fetch an address. On success the returned string is the full response
    /// body, untrimmed.
    async fn fetch_address(&self) -> Result<String, AddressError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_maps_to_address_service_error() {
        let err: CustomerError = AddressError::Unreachable {
            message: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, CustomerError::AddressService { .. }));
        assert!(err.to_string().contains("Unable to call address service"));
    }

    #[test]
    fn unexpected_status_maps_to_address_service_error() {
        let err: CustomerError = AddressError::UnexpectedStatus { status: 503 }.into();
        assert_eq!(
            err,
            CustomerError::AddressService {
                message: "Invalid response from address service: 503".to_string()
            }
        );
    }
}

//! Customer errors.

use thiserror::Error;

/// Errors returned by customer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// A customer with this id is already stored; the store is unchanged.
    #[error("Customer already exists for id: {customer_id}")]
    AlreadyExists {
        /// The colliding id.
        customer_id: String,
    },

    /// The address service could not provide an address; nothing was stored.
    #[error("Address service error: {message}")]
    AddressService {
        /// Error details.
        message: String,
    },

    /// The backing store failed.
    #[error("Customer storage error: {message}")]
    Storage {
        /// Error details.
        message: String,
    },
}

impl CustomerError {
    /// Stable error code used in API responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => "CUSTOMER_ALREADY_EXISTS",
            Self::AddressService { .. } => "ADDRESS_SERVICE_ERROR",
            Self::Storage { .. } => "INTERNAL_ERROR",
        }
    }
}

//! Customer record.

use serde::{Deserialize, Serialize};

use crate::domain::shared::CustomerId;

/// Id of the customer seeded at startup.
pub const DEFAULT_CUSTOMER_ID: &str = "1";
/// First name of the customer seeded at startup.
pub const DEFAULT_CUSTOMER_FIRST_NAME: &str = "Bob";
/// Last name of the customer seeded at startup.
pub const DEFAULT_CUSTOMER_LAST_NAME: &str = "Brown";
/// Address of the customer seeded at startup.
pub const DEFAULT_CUSTOMER_ADDRESS: &str = "2 Coventry Street";

/// A customer record.
///
/// Serializes with camelCase keys (`id`, `firstName`, `lastName`, `address`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    #[serde(default)]
    address: Option<String>,
}

impl Customer {
    /// Create a customer without an address.
    #[must_use]
    pub fn new(
        id: impl Into<CustomerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: None,
        }
    }

    /// Set the postal address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// The customer seeded into every fresh store.
    #[must_use]
    pub fn default_customer() -> Self {
        Self::new(
            DEFAULT_CUSTOMER_ID,
            DEFAULT_CUSTOMER_FIRST_NAME,
            DEFAULT_CUSTOMER_LAST_NAME,
        )
        .with_address(DEFAULT_CUSTOMER_ADDRESS)
    }

    /// Customer identifier.
    #[must_use]
    pub const fn id(&self) -> &CustomerId {
        &self.id
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Postal address, if known.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Whether an address is present.
    #[must_use]
    pub const fn has_address(&self) -> bool {
        self.address.is_some()
    }

    /// Fill in the address obtained from the address service.
    ///
    /// Only applies when no address is present; an address supplied by the
    /// caller is never overwritten. Returns whether the address was set.
    pub fn enrich_address(&mut self, address: String) -> bool {
        if self.address.is_some() {
            return false;
        }
        self.address = Some(address);
        true
    }
}

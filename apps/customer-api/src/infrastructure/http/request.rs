//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::customer::Customer;

/// Request to create a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    /// Caller-chosen identifier.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Postal address; looked up from the address service when absent.
    #[serde(default)]
    pub address: Option<String>,
}

impl From<CreateCustomerRequest> for Customer {
    fn from(request: CreateCustomerRequest) -> Self {
        let customer = Self::new(request.id, request.first_name, request.last_name);
        match request.address {
            Some(address) => customer.with_address(address),
            None => customer,
        }
    }
}

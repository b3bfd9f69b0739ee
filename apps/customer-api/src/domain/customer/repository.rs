//! Customer Repository Trait
//!
//! Persistence abstraction for customers, implemented by adapters in the
//! infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Customer;
use super::errors::CustomerError;
use crate::domain::shared::CustomerId;

/// Repository trait for customer persistence.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::AlreadyExists`] if the id is taken, leaving
    /// the stored record untouched.
    async fn insert(&self, customer: Customer) -> Result<(), CustomerError>;

    /// Find a customer by id. A missing id is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;

    /// Check whether a customer exists.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn exists(&self, id: &CustomerId) -> Result<bool, CustomerError>;

    /// Number of stored customers.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn count(&self) -> Result<usize, CustomerError>;
}

//! In-memory customer store.
//!
//! Customers live for the lifetime of the process; nothing is persisted.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::customer::{Customer, CustomerError, CustomerRepository};
use crate::domain::shared::CustomerId;

/// In-memory implementation of `CustomerRepository`.
///
/// A single lock guards the map, so inserting is an atomic check-and-insert
/// and concurrent inserts of one id store exactly one record.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of customers in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.read().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.read().is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerStore {
    async fn insert(&self, customer: Customer) -> Result<(), CustomerError> {
        let mut customers = self.customers.write();
        match customers.entry(customer.id().clone()) {
            Entry::Occupied(entry) => Err(CustomerError::AlreadyExists {
                customer_id: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!(customer = ?customer, "Storing customer");
                entry.insert(customer);
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        Ok(self.customers.read().get(id).cloned())
    }

    async fn exists(&self, id: &CustomerId) -> Result<bool, CustomerError> {
        Ok(self.customers.read().contains_key(id))
    }

    async fn count(&self) -> Result<usize, CustomerError> {
        Ok(self.customers.read().len())
    }
}

//! Customer Service
//!
//! Creates customers (enriching missing addresses through the [`AddressPort`])
//! and looks them up by id.

use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::AddressPort;
use crate::domain::customer::{Customer, CustomerError, CustomerRepository};
use crate::domain::shared::CustomerId;
use crate::infrastructure::metrics::{self, CreateOutcome};

/// Service for creating and finding customers.
pub struct CustomerService<R, A>
where
    R: CustomerRepository,
    A: AddressPort,
{
    repository: Arc<R>,
    address: Arc<A>,
}

impl<R, A> CustomerService<R, A>
where
    R: CustomerRepository,
    A: AddressPort,
{
    /// Create a new `CustomerService`.
    pub const fn new(repository: Arc<R>, address: Arc<A>) -> Self {
        Self {
            repository,
            address,
        }
    }

    /// Get the repository.
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Create a customer.
    ///
    /// If the customer has no address, one is fetched from the address port
    /// and set before storing. The returned record is exactly what was stored.
    ///
    /// # Errors
    ///
    /// - [`CustomerError::AlreadyExists`] if the id is taken
    /// - [`CustomerError::AddressService`] if the address lookup fails; the
    ///   customer is not stored
    pub async fn create(&self, mut customer: Customer) -> Result<Customer, CustomerError> {
        let customer_id = customer.id().clone();

        // 1. Reject duplicates before calling out for an address
        if self.repository.exists(&customer_id).await? {
            tracing::warn!(customer_id = %customer_id, "Customer already exists");
            metrics::record_customer_create(CreateOutcome::AlreadyExists);
            return Err(CustomerError::AlreadyExists {
                customer_id: customer_id.into_inner(),
            });
        }

        // 2. Enrich a missing address
        if !customer.has_address() {
            let address = match self.address.fetch_address().await {
                Ok(address) => {
                    metrics::record_address_request(true);
                    address
                }
                Err(e) => {
                    tracing::error!(
                        customer_id = %customer_id,
                        error = %e,
                        "Address lookup failed, customer not stored"
                    );
                    metrics::record_address_request(false);
                    metrics::record_customer_create(CreateOutcome::AddressError);
                    return Err(e.into());
                }
            };
            customer.enrich_address(address);
        }

        // 3. Store; the insert re-checks the id under the store's write lock
        if let Err(e) = self.repository.insert(customer.clone()).await {
            if matches!(e, CustomerError::AlreadyExists { .. }) {
                metrics::record_customer_create(CreateOutcome::AlreadyExists);
            }
            return Err(e);
        }

        metrics::record_customer_create(CreateOutcome::Created);
        self.report_store_size().await;
        tracing::info!(customer_id = %customer_id, "Customer created");

        Ok(customer)
    }

    /// Find a customer by id. An unknown id yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Storage`] if the store fails.
    pub async fn find(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        let started = Instant::now();
        let result = self.repository.find_by_id(id).await;
        metrics::record_find_duration(started.elapsed());

        if matches!(result, Ok(None)) {
            tracing::debug!(customer_id = %id, "Customer not found");
        }
        result
    }

    /// Insert the default customer. Called once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::AlreadyExists`] if the store already holds
    /// the default id.
    pub async fn seed_default(&self) -> Result<Customer, CustomerError> {
        let customer = Customer::default_customer();
        self.repository.insert(customer.clone()).await?;
        self.report_store_size().await;
        tracing::info!(customer_id = %customer.id(), "Default customer seeded");
        Ok(customer)
    }

    async fn report_store_size(&self) {
        match self.repository.count().await {
            Ok(count) => {
                metrics::set_customers_stored(count);
                tracing::debug!(customers = count, "Customer stored");
            }
            Err(e) => tracing::warn!(error = %e, "Failed to count customers"),
        }
    }
}

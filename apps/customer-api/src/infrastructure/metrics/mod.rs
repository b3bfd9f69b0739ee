//! Prometheus Metrics Module
//!
//! Exposes service metrics in Prometheus text format at `/metrics`.
//!
//! # Metrics
//!
//! - `customer_api_find_customer_seconds`: customer lookup latency
//! - `customer_api_customers_created_total`: create attempts by outcome
//! - `customer_api_address_requests_total`: address service calls by outcome
//! - `customer_api_customers_stored`: number of stored customers
//!
//! Recording before [`init_metrics`] is a no-op.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the Prometheus metrics recorder.
///
/// Safe to call more than once; later calls return the first handle. If a
/// different global recorder is already installed, the handle still renders
/// but stays empty.
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();

            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("Global metrics recorder already installed");
            }

            register_metrics();
            handle
        })
        .clone()
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

// =============================================================================
// Metric Registration
// =============================================================================

fn register_metrics() {
    describe_histogram!(
        "customer_api_find_customer_seconds",
        "Time to look up a customer by id"
    );
    describe_counter!(
        "customer_api_customers_created_total",
        "Customer create attempts by outcome"
    );
    describe_counter!(
        "customer_api_address_requests_total",
        "Calls to the address service by outcome"
    );
    describe_gauge!(
        "customer_api_customers_stored",
        "Number of customers held in memory"
    );
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Metric labels for create outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Customer stored.
    Created,
    /// Id already taken.
    AlreadyExists,
    /// Address lookup failed.
    AddressError,
}

impl CreateOutcome {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExists => "already_exists",
            Self::AddressError => "address_error",
        }
    }
}

/// Record a customer create attempt.
pub fn record_customer_create(outcome: CreateOutcome) {
    counter!(
        "customer_api_customers_created_total",
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Record a call to the address service.
pub fn record_address_request(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    counter!(
        "customer_api_address_requests_total",
        "outcome" => outcome
    )
    .increment(1);
}

/// Record customer lookup duration.
pub fn record_find_duration(duration: Duration) {
    histogram!("customer_api_find_customer_seconds").record(duration.as_secs_f64());
}

/// Update the stored customer count.
#[allow(clippy::cast_precision_loss)]
pub fn set_customers_stored(count: usize) {
    gauge!("customer_api_customers_stored").set(count as f64);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_outcome_as_str() {
        assert_eq!(CreateOutcome::Created.as_str(), "created");
        assert_eq!(CreateOutcome::AlreadyExists.as_str(), "already_exists");
        assert_eq!(CreateOutcome::AddressError.as_str(), "address_error");
    }

    #[test]
    fn init_is_idempotent_and_renders_recorded_metrics() {
        let _first = init_metrics();
        let handle = init_metrics();
        assert!(get_metrics_handle().is_some());

        record_customer_create(CreateOutcome::Created);
        set_customers_stored(3);

        let rendered = handle.render();
        assert!(rendered.contains("customer_api_customers_created_total"));
        assert!(rendered.contains("customer_api_customers_stored"));
    }
}

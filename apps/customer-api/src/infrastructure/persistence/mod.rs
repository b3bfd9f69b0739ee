//! Persistence Adapters
//!
//! Implementations of the customer repository trait.

pub mod in_memory;

pub use in_memory::InMemoryCustomerStore;

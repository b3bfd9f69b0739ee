//! Application Services
//!
//! Services that orchestrate the domain and the driven ports.

mod customer_service;

pub use customer_service::CustomerService;

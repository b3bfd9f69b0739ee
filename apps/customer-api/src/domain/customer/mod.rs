//! Customer Records
//!
//! A customer is identified by a caller-chosen string id and carries a first
//! name, a last name and a postal address. The address may be missing when a
//! customer is submitted; it is filled in exactly once during creation.

mod aggregate;
mod errors;
mod repository;

pub use aggregate::{
    Customer, DEFAULT_CUSTOMER_ADDRESS, DEFAULT_CUSTOMER_FIRST_NAME, DEFAULT_CUSTOMER_ID,
    DEFAULT_CUSTOMER_LAST_NAME,
};
pub use errors::CustomerError;
pub use repository::CustomerRepository;

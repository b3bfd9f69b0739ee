//! Domain Layer
//!
//! The innermost layer, free of infrastructure dependencies.
//!
//! - [`customer`]: Customer record, its errors and the repository trait
//! - [`shared`]: Identifiers shared across the domain

pub mod customer;
pub mod shared;

//! Shared domain types.

mod identifiers;

pub use identifiers::CustomerId;

//! Application Ports (Driven)
//!
//! Interfaces the application uses to reach external systems.

mod address_port;

#[cfg(test)]
pub use address_port::MockAddressPort;
pub use address_port::{AddressError, AddressPort};

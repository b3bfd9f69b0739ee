//! Application Layer
//!
//! Orchestrates the domain through services.
//!
//! - **Ports**: Interfaces for external systems
//! - **Services**: Customer creation and lookup

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;

//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing customer create/find plus health and metrics.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;

//! External Services
//!
//! This module contains services that interact with external systems:
//! - relay: Background worker that delivers contact-form submissions

pub mod relay;

// Re-export commonly used types for convenience
pub use relay::{spawn_relay_service, RelayCredentials, RelayRequest, RelayResponse};

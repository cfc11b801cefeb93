//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//! - mouse: Pointer motion, clicks and the wheel
//! - relay: Outcomes from the email relay background service
//!
//! Handlers are plain functions that take &mut App and the current time.

pub mod keyboard;
pub mod mouse;
pub mod relay;

// Re-export for convenience
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
pub use relay::handle_relay_response;

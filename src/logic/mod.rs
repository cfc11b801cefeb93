//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - errors: Relay failure classification
//! - focus: Keyboard focus ring
//! - formatting: Clock, truncation and centring helpers
//! - navigation: Section ordering and anchors
//! - reactor: Arc reactor animation math
//! - reveal: Scroll-triggered reveal timing
//! - theme: Colour palettes per theme
//! - tilt: Pointer-driven background perspective
//! - typewriter: Typewriter reveal helpers and timing constants

pub mod errors;
pub mod focus;
pub mod formatting;
pub mod navigation;
pub mod reactor;
pub mod reveal;
pub mod theme;
pub mod tilt;
pub mod typewriter;

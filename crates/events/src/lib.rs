//! Retro theme event infrastructure.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ThemeEventEnvelope`]: wire form of a theme domain event.
//! - [`publish_pending`]: drains a theme's queued events onto a bus.

pub mod bus;
pub mod publisher;

pub use bus::{EventBus, ThemeEventEnvelope};
pub use publisher::publish_pending;

//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] fans [`ThemeEventEnvelope`]s out to every subscriber. It is
//! designed to be shared via `Arc<EventBus>`.

use chrono::{DateTime, Utc};
use retro_theme_core::{ThemeEvent, ThemeId};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ThemeEventEnvelope
// ---------------------------------------------------------------------------

/// Wire form of a theme domain event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeEventEnvelope {
    /// Dot-separated event name, e.g. `"retro_theme.created"`.
    pub event_type: String,

    /// Theme the event belongs to.
    pub theme_id: ThemeId,

    /// The full event, serialized.
    pub payload: serde_json::Value,

    /// When the event was raised (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ThemeEventEnvelope {
    /// Wrap a domain event, serializing it into the payload.
    pub fn from_event(event: &ThemeEvent) -> Result<Self, serde_json::Error> {
        Ok(Self {
            event_type: event.event_type().to_string(),
            theme_id: event.theme_id(),
            payload: serde_json::to_value(event)?,
            timestamp: event.timestamp(),
        })
    }

    /// Recover the typed event from the payload.
    pub fn event(&self) -> Option<ThemeEvent> {
        serde_json::from_value(self.payload.clone()).ok()
    }
}

impl TryFrom<&ThemeEvent> for ThemeEventEnvelope {
    type Error = serde_json::Error;

    fn try_from(event: &ThemeEvent) -> Result<Self, Self::Error> {
        Self::from_event(event)
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// # Usage
///
/// ```rust
/// use retro_theme_events::bus::EventBus;
///
/// let bus = EventBus::default();
/// let _rx = bus.subscribe();
/// assert_eq!(bus.subscriber_count(), 1);
/// ```
pub struct EventBus {
    sender: broadcast::Sender<ThemeEventEnvelope>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an envelope to all current subscribers.
    ///
    /// If there are no active subscribers the envelope is silently dropped.
    pub fn publish(&self, envelope: ThemeEventEnvelope) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(envelope);
    }

    /// Subscribe to all envelopes published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeEventEnvelope> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

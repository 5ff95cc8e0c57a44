//! Drains entity domain events onto the [`EventBus`].

use retro_theme_core::RetroTheme;

use crate::bus::{EventBus, ThemeEventEnvelope};

/// Take every pending event from `theme` and publish it, oldest first.
///
/// All events are serialized before any is published, so a serialization
/// failure publishes nothing. The drained events are not requeued.
/// Returns the number of events published.
pub fn publish_pending(theme: &mut RetroTheme, bus: &EventBus) -> Result<usize, serde_json::Error> {
    let envelopes = theme
        .take_events()
        .iter()
        .map(ThemeEventEnvelope::from_event)
        .collect::<Result<Vec<_>, _>>()?;
    let count = envelopes.len();

    for envelope in envelopes {
        tracing::debug!(
            theme_id = %envelope.theme_id,
            event_type = %envelope.event_type,
            "Publishing theme event",
        );
        bus.publish(envelope);
    }

    Ok(count)
}

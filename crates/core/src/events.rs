use serde::{Deserialize, Serialize};

use crate::types::{ThemeId, Timestamp};

/// Domain events raised by a [`RetroTheme`](crate::theme::RetroTheme).
///
/// Events queue up on the entity and are drained by whoever publishes
/// them, usually via `take_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThemeEvent {
    /// A retro theme passed validation and was created
    Created {
        theme_id: ThemeId,
        base_theme_version: String,
        /// Top-level override categories present at creation
        override_categories: Vec<String>,
        timestamp: Timestamp,
    },

    /// The override tree was replaced
    OverridesUpdated {
        theme_id: ThemeId,
        updated_categories: Vec<String>,
        timestamp: Timestamp,
    },
}

impl ThemeEvent {
    /// Dotted event name used on the wire.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Created { .. } => "retro_theme.created",
            Self::OverridesUpdated { .. } => "retro_theme.overrides_updated",
        }
    }

    pub fn theme_id(&self) -> ThemeId {
        match self {
            Self::Created { theme_id, .. } | Self::OverridesUpdated { theme_id, .. } => *theme_id,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Created { timestamp, .. } | Self::OverridesUpdated { timestamp, .. } => {
                *timestamp
            }
        }
    }

    /// Category names carried by the event.
    pub fn categories(&self) -> &[String] {
        match self {
            Self::Created {
                override_categories,
                ..
            } => override_categories,
            Self::OverridesUpdated {
                updated_categories, ..
            } => updated_categories,
        }
    }
}

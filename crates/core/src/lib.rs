//! Retro theme domain core.
//!
//! - [`RetroTheme`]: entity pairing a base theme with a validated
//!   override tree, emitting [`ThemeEvent`]s as it changes.
//! - [`validation`]: hard invariants plus advisory aesthetic checks.
//! - [`tokens`]: deep merge and lookup over [`TokenTree`]s.
//! - [`color`]: hex decomposition and the warmth heuristic.
//! - [`base`]: contracts for the external base-theme builder.

pub mod base;
pub mod color;
pub mod error;
pub mod events;
pub mod identity;
pub mod theme;
pub mod tokens;
pub mod types;
pub mod validation;

pub use base::{BaseTheme, BaseThemeBuilder, BaseThemeInput, SharedBaseTheme, StaticBaseTheme};
pub use error::CoreError;
pub use events::ThemeEvent;
pub use theme::{Characteristic, NewRetroTheme, RetroTheme};
pub use types::{ThemeId, Timestamp, TokenTree};
pub use validation::{Advisory, AdvisoryKind, ValidationReport};

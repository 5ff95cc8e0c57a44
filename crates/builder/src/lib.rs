//! Retro theme builder.
//!
//! Turns a [`RetroThemeConfig`] or a named [`RetroPreset`] into a
//! validated [`RetroTheme`](retro_theme_core::RetroTheme):
//!
//! - [`config`]: declarative input DTOs.
//! - [`preset`]: the classic / vintage / neon tables.
//! - [`overrides`]: palette, role, typography and shadow derivation.
//! - [`adjust`]: pluggable color adjustment.
//! - [`seed`]: built-in base-theme builder.
//! - [`service`]: [`RetroThemeBuilder`], tying it together.

pub mod adjust;
pub mod config;
pub mod overrides;
pub mod preset;
pub mod seed;
pub mod service;

pub use adjust::{adjust_brightness, adjust_color_warmth, ColorAdjuster, PassthroughAdjuster};
pub use config::{BaseColorConfig, RetroColorConfig, RetroThemeConfig, RetroTypographyConfig};
pub use overrides::generate_overrides;
pub use preset::RetroPreset;
pub use seed::SeedThemeBuilder;
pub use service::RetroThemeBuilder;

//! Retro theme builder service.
//!
//! Orchestrates base-theme construction, override derivation and entity
//! creation. Collaborators are injected; there is no global instance.

use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use retro_theme_core::{BaseThemeBuilder, BaseThemeInput, CoreError, NewRetroTheme, RetroTheme, TokenTree};
use serde_json::Value;

use crate::adjust::{ColorAdjuster, PassthroughAdjuster};
use crate::config::RetroThemeConfig;
use crate::overrides::generate_overrides;
use crate::preset::RetroPreset;
use crate::seed::SeedThemeBuilder;

/// Value of the `style` metadata key.
pub const METADATA_STYLE: &str = "retro";

/// Value of the `version` metadata key.
pub const METADATA_VERSION: &str = "1.0";

/// Turns configurations and presets into validated [`RetroTheme`]s.
#[derive(Clone)]
pub struct RetroThemeBuilder {
    base_builder: Arc<dyn BaseThemeBuilder>,
    adjuster: Arc<dyn ColorAdjuster>,
}

impl RetroThemeBuilder {
    /// Builder over `base_builder` with the passthrough color adjuster.
    pub fn new(base_builder: Arc<dyn BaseThemeBuilder>) -> Self {
        Self {
            base_builder,
            adjuster: Arc::new(PassthroughAdjuster),
        }
    }

    /// Replace the color adjuster used for scale derivation.
    pub fn with_adjuster(mut self, adjuster: Arc<dyn ColorAdjuster>) -> Self {
        self.adjuster = adjuster;
        self
    }

    /// Build a retro theme from a full configuration.
    pub fn build_from_config(&self, config: &RetroThemeConfig) -> Result<RetroTheme, CoreError> {
        config.check()?;

        let base_theme = self.base_builder.build_theme(&BaseThemeInput {
            color: config.base_color_seed(),
            spacing: config.spacing.clone().unwrap_or(Value::Null),
            typography: config.typography.clone().unwrap_or(Value::Null),
        })?;

        let overrides = generate_overrides(config, self.adjuster.as_ref())?;
        let metadata = build_metadata(config)?;

        let theme = RetroTheme::create(
            NewRetroTheme::new(base_theme)
                .with_overrides(overrides)
                .with_metadata(metadata),
        )?;

        tracing::info!(
            theme_id = %theme.id(),
            base_version = theme.base_theme().version(),
            advisories = theme.advisories().len(),
            "Retro theme built",
        );
        Ok(theme)
    }

    /// Build one of the fixed presets.
    pub fn build_from_preset(&self, preset: RetroPreset) -> Result<RetroTheme, CoreError> {
        tracing::debug!(preset = %preset, "Building retro preset");
        self.build_from_config(&preset.config())
    }

    /// Resolve `name` to a preset and build it.
    pub fn build_from_preset_name(&self, name: &str) -> Result<RetroTheme, CoreError> {
        self.build_from_preset(name.parse()?)
    }
}

impl Default for RetroThemeBuilder {
    fn default() -> Self {
        Self::new(Arc::new(SeedThemeBuilder::new()))
    }
}

impl fmt::Debug for RetroThemeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetroThemeBuilder").finish_non_exhaustive()
    }
}

/// `{style, version, generatedAt, config}` with the config stored verbatim.
fn build_metadata(config: &RetroThemeConfig) -> Result<TokenTree, CoreError> {
    let config_value = serde_json::to_value(config)
        .map_err(|e| CoreError::Validation(format!("Config is not serializable: {e}")))?;

    let mut metadata = TokenTree::new();
    metadata.insert("style".into(), Value::from(METADATA_STYLE));
    metadata.insert("version".into(), Value::from(METADATA_VERSION));
    metadata.insert(
        "generatedAt".into(),
        Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    metadata.insert("config".into(), config_value);
    Ok(metadata)
}

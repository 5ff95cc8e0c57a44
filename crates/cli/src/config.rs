//! Environment-driven configuration for the `retro-theme` binary.

use std::path::PathBuf;
use std::str::FromStr;

use retro_theme_builder::RetroPreset;

pub const ENV_PRESET: &str = "RETRO_THEME_PRESET";
pub const ENV_CONFIG: &str = "RETRO_THEME_CONFIG";
pub const ENV_OUTPUT: &str = "RETRO_THEME_OUTPUT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidPreset {
        var: &'static str,
        source: retro_theme_core::CoreError,
    },

    #[error("{var}: unknown output '{value}'. Must be one of: tokens, overrides, report")]
    InvalidOutput { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Where the theme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    Preset(RetroPreset),
    /// JSON-encoded `RetroThemeConfig` on disk.
    ConfigFile(PathBuf),
}

/// What gets written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Merged token tree.
    #[default]
    Tokens,
    /// Retro override tree only.
    Overrides,
    /// Entity summary: identity, characteristics, advisories, metadata.
    Report,
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokens" => Ok(Self::Tokens),
            "overrides" => Ok(Self::Overrides),
            "report" => Ok(Self::Report),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub source: ThemeSource,
    pub output: OutputKind,
}

impl ExportConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. A config file wins over a preset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source = match lookup(ENV_CONFIG) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::Empty { var: ENV_CONFIG })
            }
            Some(path) => ThemeSource::ConfigFile(PathBuf::from(path)),
            None => {
                let name = lookup(ENV_PRESET).unwrap_or_else(|| "classic".into());
                let preset = name.parse::<RetroPreset>().map_err(|source| ConfigError::InvalidPreset {
                    var: ENV_PRESET,
                    source,
                })?;
                ThemeSource::Preset(preset)
            }
        };

        let output = match lookup(ENV_OUTPUT) {
            Some(value) => value.parse::<OutputKind>().map_err(|value| ConfigError::InvalidOutput {
                var: ENV_OUTPUT,
                value,
            })?,
            None => OutputKind::default(),
        };

        Ok(Self { source, output })
    }
}

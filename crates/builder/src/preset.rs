//! Named retro presets.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use retro_theme_core::CoreError;
use serde::{Deserialize, Serialize};

use crate::config::{BaseColorConfig, RetroColorConfig, RetroThemeConfig, RetroTypographyConfig};

/// A fixed configuration shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetroPreset {
    Classic,
    Vintage,
    Neon,
}

impl RetroPreset {
    /// Every preset, in table order.
    pub const ALL: [RetroPreset; 3] = [Self::Classic, Self::Vintage, Self::Neon];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Vintage => "vintage",
            Self::Neon => "neon",
        }
    }

    /// The complete configuration this preset stands for.
    pub fn config(self) -> RetroThemeConfig {
        match self {
            Self::Classic => PresetColors {
                base_primary: "#d35400",
                base_text: "#3c1f0f",
                base_surface: "#fff4e6",
                neutral: "#f5f5f4",
                primary: "#d35400",
                secondary: "#8b5e3c",
                text_primary: "#3c1f0f",
                text_secondary: "#8b5e3c",
                surface: "#fff4e6",
                elevated: "#fdebd0",
                font_family: "Courier New, monospace",
            },
            Self::Vintage => PresetColors {
                base_primary: "#b84300",
                base_text: "#2d1b0f",
                base_surface: "#fef3e7",
                neutral: "#f3f2f1",
                primary: "#b84300",
                secondary: "#6b4a2f",
                text_primary: "#2d1b0f",
                text_secondary: "#6b4a2f",
                surface: "#fef3e7",
                elevated: "#fce5cd",
                font_family: "Times New Roman, serif",
            },
            Self::Neon => PresetColors {
                base_primary: "#ff0080",
                base_text: "#ffffff",
                base_surface: "#0a0a0a",
                neutral: "#1a1a1a",
                primary: "#ff0080",
                secondary: "#00ffff",
                text_primary: "#ffffff",
                text_secondary: "#cccccc",
                surface: "#0a0a0a",
                elevated: "#1a1a1a",
                font_family: "Courier New, monospace",
            },
        }
        .into_config()
    }
}

impl fmt::Display for RetroPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RetroPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CoreError::UnknownPreset(format!(
                    "'{s}'. Must be one of: {}",
                    Self::ALL.map(Self::as_str).join(", ")
                ))
            })
    }
}

/// The literal values that vary between presets.
struct PresetColors {
    base_primary: &'static str,
    base_text: &'static str,
    base_surface: &'static str,
    neutral: &'static str,
    primary: &'static str,
    secondary: &'static str,
    text_primary: &'static str,
    text_secondary: &'static str,
    surface: &'static str,
    elevated: &'static str,
    font_family: &'static str,
}

impl PresetColors {
    fn into_config(self) -> RetroThemeConfig {
        let roles = |key: &str, value: &str| BTreeMap::from([(key.to_string(), value.to_string())]);

        RetroThemeConfig {
            base_colors: Some(BaseColorConfig {
                palette: Some(BTreeMap::from([(
                    "primary".to_string(),
                    roles("500", self.base_primary),
                )])),
                text: Some(roles("primary", self.base_text)),
                background: Some(roles("surface", self.base_surface)),
            }),
            spacing: None,
            typography: None,
            retro_colors: Some(RetroColorConfig {
                neutral: Some(self.neutral.into()),
                primary: Some(self.primary.into()),
                secondary: Some(self.secondary.into()),
                text_primary: Some(self.text_primary.into()),
                text_secondary: Some(self.text_secondary.into()),
                surface: Some(self.surface.into()),
                elevated: Some(self.elevated.into()),
                ..Default::default()
            }),
            retro_typography: Some(RetroTypographyConfig {
                font_family: Some(self.font_family.into()),
            }),
        }
    }
}

//! Declarative input for [`RetroThemeBuilder`](crate::RetroThemeBuilder).
//!
//! Every field is optional. A field that is present must be usable: empty
//! strings are rejected by [`RetroThemeConfig::check`] rather than being
//! silently replaced by a default.

use std::collections::BTreeMap;

use retro_theme_core::CoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Role name -> color literal.
pub type ColorRoles = BTreeMap<String, String>;

/// Full retro theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RetroThemeConfig {
    /// Seed colors for the base theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_colors: Option<BaseColorConfig>,

    /// Spacing seed, passed through to the base builder untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Value>,

    /// Typography seed, passed through to the base builder untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub retro_colors: Option<RetroColorConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub retro_typography: Option<RetroTypographyConfig>,
}

impl RetroThemeConfig {
    /// Run field validation, mapping failures into [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }

    /// The configured retro primary color, if any.
    pub fn retro_primary(&self) -> Option<&str> {
        self.retro_colors.as_ref()?.primary.as_deref()
    }

    /// Seed color tree for the base builder.
    pub fn base_color_seed(&self) -> Value {
        self.base_colors
            .as_ref()
            .and_then(|c| serde_json::to_value(c).ok())
            .unwrap_or(Value::Null)
    }
}

/// Base-theme color seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseColorConfig {
    /// Palette name -> scale step -> color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<BTreeMap<String, ColorRoles>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ColorRoles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorRoles>,
}

/// Retro-specific colors. Absent fields fall back to warm defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RetroColorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub neutral: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub secondary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text_primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text_secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text_muted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text_inverse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub text_disabled: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub surface: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub elevated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub muted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub inverse: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub border_default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub border_subtle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub border_strong: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub border_focus: Option<String>,
}

/// Retro typography. An absent family falls back to Courier New.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RetroTypographyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub font_family: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_fields() {
        let config: RetroThemeConfig = serde_json::from_value(json!({
            "retroColors": {"primary": "#d35400", "textPrimary": "#3c1f0f", "borderFocus": "#b84300"},
            "retroTypography": {"fontFamily": "Courier New, monospace"}
        }))
        .unwrap();

        let colors = config.retro_colors.as_ref().unwrap();
        assert_eq!(colors.text_primary.as_deref(), Some("#3c1f0f"));
        assert_eq!(colors.border_focus.as_deref(), Some("#b84300"));
        assert_eq!(config.retro_primary(), Some("#d35400"));
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let config = RetroThemeConfig {
            retro_colors: Some(RetroColorConfig {
                primary: Some("#d35400".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"retroColors": {"primary": "#d35400"}})
        );
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(RetroThemeConfig::default().check().is_ok());
    }

    #[test]
    fn empty_color_string_is_rejected() {
        let config = RetroThemeConfig {
            retro_colors: Some(RetroColorConfig {
                primary: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_matches!(config.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn empty_font_family_is_rejected() {
        let config = RetroThemeConfig {
            retro_typography: Some(RetroTypographyConfig {
                font_family: Some(String::new()),
            }),
            ..Default::default()
        };
        assert_matches!(config.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn base_color_seed_is_null_when_absent() {
        assert!(RetroThemeConfig::default().base_color_seed().is_null());
    }
}

//! Built-in base-theme builder.
//!
//! Produces a neutral token tree and layers the seed input on top. Hosts
//! with their own design system plug in a different
//! [`BaseThemeBuilder`] instead.

use retro_theme_core::tokens::deep_merge;
use retro_theme_core::{BaseThemeBuilder, BaseThemeInput, CoreError, SharedBaseTheme, StaticBaseTheme, TokenTree};
use serde_json::{json, Value};

/// Version reported by themes from [`SeedThemeBuilder`].
pub const SEED_THEME_VERSION: &str = "1.0.0";

/// Base-theme builder backed by a fixed neutral token set.
#[derive(Debug, Clone, Default)]
pub struct SeedThemeBuilder;

impl SeedThemeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// The neutral tokens every seed theme starts from.
    pub fn default_tokens() -> TokenTree {
        let tokens = json!({
            "color": {
                "palette": {
                    "neutral": {"50": "#fafafa", "500": "#737373", "900": "#171717"},
                    "primary": {"500": "#2563eb", "600": "#1d4ed8"},
                    "secondary": {"500": "#7c3aed", "600": "#6d28d9"}
                },
                "text": {
                    "primary": "#171717",
                    "secondary": "#404040",
                    "muted": "#737373",
                    "inverse": "#ffffff",
                    "disabled": "#a3a3a3"
                },
                "background": {
                    "surface": "#ffffff",
                    "elevated": "#fafafa",
                    "muted": "#f5f5f5",
                    "inverse": "#171717"
                },
                "border": {
                    "default": "#e5e5e5",
                    "subtle": "#f5f5f5",
                    "strong": "#a3a3a3",
                    "focus": "#2563eb"
                }
            },
            "spacing": {"xs": "2px", "sm": "4px", "md": "8px", "lg": "16px", "xl": "32px"},
            "typography": {
                "fontFamily": {"base": "system-ui, sans-serif", "mono": "ui-monospace, monospace"},
                "fontSize": {"sm": "0.875rem", "md": "1rem", "lg": "1.25rem"}
            },
            "shadow": {
                "semantic": {
                    "sm": "0 1px 2px rgba(0, 0, 0, 0.05)",
                    "md": "0 4px 6px rgba(0, 0, 0, 0.1)",
                    "lg": "0 10px 15px rgba(0, 0, 0, 0.1)",
                    "focus": "0 0 0 2px rgba(37, 99, 235, 0.5)"
                }
            },
            "radius": {"sm": "2px", "md": "4px", "lg": "8px"}
        });
        match tokens {
            Value::Object(map) => map,
            _ => TokenTree::new(),
        }
    }
}

impl BaseThemeBuilder for SeedThemeBuilder {
    fn build_theme(&self, input: &BaseThemeInput) -> Result<SharedBaseTheme, CoreError> {
        let mut seed = TokenTree::new();
        for (category, value) in [
            ("color", &input.color),
            ("spacing", &input.spacing),
            ("typography", &input.typography),
        ] {
            match value {
                Value::Null => {}
                Value::Object(_) => {
                    seed.insert(category.to_string(), value.clone());
                }
                other => {
                    return Err(CoreError::Validation(format!(
                        "Base theme seed '{category}' must be an object, got {other}"
                    )));
                }
            }
        }

        let tokens = deep_merge(&Self::default_tokens(), &seed);
        Ok(StaticBaseTheme::shared(SEED_THEME_VERSION, tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_default_tokens() {
        let theme = SeedThemeBuilder::new()
            .build_theme(&BaseThemeInput::default())
            .unwrap();
        assert_eq!(theme.version(), SEED_THEME_VERSION);
        assert_eq!(theme.tokens(), SeedThemeBuilder::default_tokens());
    }

    #[test]
    fn seed_values_override_defaults() {
        let input = BaseThemeInput {
            color: json!({"palette": {"primary": {"500": "#d35400"}}, "text": {"primary": "#3c1f0f"}}),
            spacing: json!({"md": "10px"}),
            typography: Value::Null,
        };
        let tokens = SeedThemeBuilder::new().build_theme(&input).unwrap().tokens();
        assert_eq!(tokens["color"]["palette"]["primary"]["500"], "#d35400");
        assert_eq!(tokens["color"]["palette"]["primary"]["600"], "#1d4ed8");
        assert_eq!(tokens["color"]["text"]["primary"], "#3c1f0f");
        assert_eq!(tokens["spacing"]["md"], "10px");
        assert_eq!(tokens["spacing"]["sm"], "4px");
    }

    #[test]
    fn non_object_seed_is_rejected() {
        let input = BaseThemeInput {
            spacing: json!("8px"),
            ..Default::default()
        };
        // `assert_matches!` would require `Debug` on `dyn BaseTheme`; same pattern check.
        assert!(matches!(
            SeedThemeBuilder::new().build_theme(&input),
            Err(CoreError::Validation(msg)) if msg.contains("spacing")
        ));
    }
}

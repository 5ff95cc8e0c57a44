//! Renders a built theme as JSON for stdout.

use retro_theme_core::{Advisory, Characteristic, RetroTheme, ThemeId, Timestamp, TokenTree};
use serde::Serialize;
use serde_json::Value;

use crate::config::OutputKind;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeReport<'a> {
    id: ThemeId,
    created_at: Timestamp,
    updated_at: Timestamp,
    base_theme_version: &'a str,
    valid: bool,
    characteristics: Vec<Characteristic>,
    advisories: &'a [Advisory],
    metadata: TokenTree,
}

/// JSON value for the requested output kind.
pub fn render(theme: &RetroTheme, kind: OutputKind) -> Result<Value, serde_json::Error> {
    match kind {
        OutputKind::Tokens => Ok(Value::Object(theme.tokens())),
        OutputKind::Overrides => Ok(Value::Object(theme.overrides())),
        OutputKind::Report => serde_json::to_value(ThemeReport {
            id: theme.id(),
            created_at: theme.created_at(),
            updated_at: theme.updated_at(),
            base_theme_version: theme.base_theme().version(),
            valid: theme.is_valid(),
            characteristics: theme.characteristics(),
            advisories: theme.advisories(),
            metadata: theme.metadata(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retro_theme_builder::{RetroPreset, RetroThemeBuilder};

    fn vintage() -> RetroTheme {
        RetroThemeBuilder::default()
            .build_from_preset(RetroPreset::Vintage)
            .unwrap()
    }

    #[test]
    fn report_summarises_entity() {
        let theme = vintage();
        let report = render(&theme, OutputKind::Report).unwrap();

        assert_eq!(report["id"], theme.id().to_string());
        assert_eq!(report["baseThemeVersion"], "1.0.0");
        assert_eq!(report["valid"], true);
        assert_eq!(report["characteristics"], serde_json::json!(["warm-palette", "soft-shadows"]));
        assert_eq!(report["advisories"][0]["kind"], "non_monospace_font");
        assert_eq!(report["metadata"]["style"], "retro");
    }

    #[test]
    fn overrides_output_excludes_base_tokens() {
        let theme = vintage();
        let overrides = render(&theme, OutputKind::Overrides).unwrap();
        let tokens = render(&theme, OutputKind::Tokens).unwrap();

        assert!(overrides.get("spacing").is_none());
        assert_eq!(tokens["spacing"]["md"], "8px");
        assert_eq!(
            tokens["color"]["palette"]["primary"]["500"],
            overrides["color"]["palette"]["primary"]["500"]
        );
    }
}

//! Procedural derivation of the retro override tree.

use retro_theme_core::color::Rgb;
use retro_theme_core::{CoreError, TokenTree};
use serde_json::{json, Map, Value};

use crate::adjust::ColorAdjuster;
use crate::config::{RetroColorConfig, RetroThemeConfig};

/* --------------------------------------------------------------------------
   Defaults
   -------------------------------------------------------------------------- */

pub const DEFAULT_NEUTRAL: &str = "#f5f5f4";
pub const DEFAULT_PRIMARY: &str = "#d35400";
pub const DEFAULT_SECONDARY: &str = "#8b5e3c";

pub const DEFAULT_FONT_FAMILY: &str = "Courier New, monospace";

const DEFAULT_TEXT: [(&str, &str); 5] = [
    ("primary", "#3c1f0f"),
    ("secondary", "#8b5e3c"),
    ("muted", "#d9b899"),
    ("inverse", "#ffffff"),
    ("disabled", "#a16207"),
];

const DEFAULT_BACKGROUND: [(&str, &str); 4] = [
    ("surface", "#fff4e6"),
    ("elevated", "#fdebd0"),
    ("muted", "#fbe3c4"),
    ("inverse", "#3c1f0f"),
];

const DEFAULT_BORDER: [(&str, &str); 3] = [
    ("default", "#e0c4a1"),
    ("subtle", "#f5f5f4"),
    ("strong", "#d9b899"),
];

/// Neutral scale steps and their warmth factors. Step 500 is the base color.
const NEUTRAL_STEPS: [(&str, Option<f64>); 10] = [
    ("50", Some(0.95)),
    ("100", Some(0.9)),
    ("200", Some(0.8)),
    ("300", Some(0.7)),
    ("400", Some(0.6)),
    ("500", None),
    ("600", Some(0.4)),
    ("700", Some(0.3)),
    ("800", Some(0.2)),
    ("900", Some(0.1)),
];

pub const PRIMARY_DARKEN: i32 = -20;
pub const SECONDARY_DARKEN: i32 = -15;

/* --------------------------------------------------------------------------
   Entry point
   -------------------------------------------------------------------------- */

/// Derive the override tree for `config`.
///
/// `color` and `typography` are only emitted when the matching retro
/// section is configured; `shadow` is always emitted.
pub fn generate_overrides(
    config: &RetroThemeConfig,
    adjuster: &dyn ColorAdjuster,
) -> Result<TokenTree, CoreError> {
    let mut overrides = TokenTree::new();

    if let Some(colors) = &config.retro_colors {
        overrides.insert(
            "color".to_string(),
            json!({
                "palette": generate_palette(colors, adjuster),
                "text": generate_text_colors(colors),
                "background": generate_background_colors(colors),
                "border": generate_border_colors(colors),
            }),
        );
    }

    if let Some(typography) = &config.retro_typography {
        let family = typography
            .font_family
            .as_deref()
            .unwrap_or(DEFAULT_FONT_FAMILY);
        overrides.insert(
            "typography".to_string(),
            json!({ "fontFamily": { "base": family } }),
        );
    }

    let primary = config.retro_primary().unwrap_or(DEFAULT_PRIMARY);
    let shadows = generate_shadows(primary)?;
    overrides.insert("shadow".to_string(), json!({ "semantic": shadows }));

    Ok(overrides)
}

/* --------------------------------------------------------------------------
   Palettes
   -------------------------------------------------------------------------- */

fn generate_palette(colors: &RetroColorConfig, adjuster: &dyn ColorAdjuster) -> Value {
    let neutral = colors.neutral.as_deref().unwrap_or(DEFAULT_NEUTRAL);
    let primary = colors.primary.as_deref().unwrap_or(DEFAULT_PRIMARY);
    let secondary = colors.secondary.as_deref().unwrap_or(DEFAULT_SECONDARY);

    json!({
        "neutral": neutral_scale(neutral, adjuster),
        "primary": two_step_scale(primary, PRIMARY_DARKEN, adjuster),
        "secondary": two_step_scale(secondary, SECONDARY_DARKEN, adjuster),
    })
}

/// Ten-step warm neutral scale (50..=900).
pub fn neutral_scale(base: &str, adjuster: &dyn ColorAdjuster) -> Value {
    let scale: Map<String, Value> = NEUTRAL_STEPS
        .iter()
        .map(|&(step, factor)| {
            let color = match factor {
                Some(f) => adjuster.adjust_warmth(base, f),
                None => base.to_string(),
            };
            (step.to_string(), Value::String(color))
        })
        .collect();
    Value::Object(scale)
}

/// `500` is the base color, `600` the base darkened by `delta`.
pub fn two_step_scale(base: &str, delta: i32, adjuster: &dyn ColorAdjuster) -> Value {
    json!({
        "500": base,
        "600": adjuster.adjust_brightness(base, delta),
    })
}

/* --------------------------------------------------------------------------
   Roles
   -------------------------------------------------------------------------- */

fn roles(pairs: impl IntoIterator<Item = (&'static str, String)>) -> Value {
    Value::Object(
        pairs
            .into_iter()
            .map(|(role, color)| (role.to_string(), Value::String(color)))
            .collect(),
    )
}

fn pick(configured: &Option<String>, default: &str) -> String {
    configured.as_deref().unwrap_or(default).to_string()
}

fn generate_text_colors(colors: &RetroColorConfig) -> Value {
    let configured = [
        &colors.text_primary,
        &colors.text_secondary,
        &colors.text_muted,
        &colors.text_inverse,
        &colors.text_disabled,
    ];
    roles(
        DEFAULT_TEXT
            .iter()
            .zip(configured)
            .map(|(&(role, default), value)| (role, pick(value, default))),
    )
}

fn generate_background_colors(colors: &RetroColorConfig) -> Value {
    let configured = [
        &colors.surface,
        &colors.elevated,
        &colors.muted,
        &colors.inverse,
    ];
    roles(
        DEFAULT_BACKGROUND
            .iter()
            .zip(configured)
            .map(|(&(role, default), value)| (role, pick(value, default))),
    )
}

fn generate_border_colors(colors: &RetroColorConfig) -> Value {
    let configured = [
        &colors.border_default,
        &colors.border_subtle,
        &colors.border_strong,
    ];
    let focus = colors
        .border_focus
        .as_deref()
        .or(colors.primary.as_deref())
        .unwrap_or(DEFAULT_PRIMARY)
        .to_string();

    roles(
        DEFAULT_BORDER
            .iter()
            .zip(configured)
            .map(|(&(role, default), value)| (role, pick(value, default)))
            .chain(std::iter::once(("focus", focus))),
    )
}

/* --------------------------------------------------------------------------
   Shadows
   -------------------------------------------------------------------------- */

/// `sm`/`md`/`lg` blur shadows and a 2px `focus` ring tinted with `primary`.
pub fn generate_shadows(primary: &str) -> Result<Value, CoreError> {
    let Rgb { r, g, b } = Rgb::from_hex(primary)?;
    Ok(json!({
        "sm": format!("0 1px 2px rgba({r}, {g}, {b}, 0.25)"),
        "md": format!("0 4px 6px rgba({r}, {g}, {b}, 0.35)"),
        "lg": format!("0 10px 15px rgba({r}, {g}, {b}, 0.35)"),
        "focus": format!("0 0 0 2px rgba({r}, {g}, {b}, 0.5)"),
    }))
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */

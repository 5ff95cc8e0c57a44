//! Retro business-rule validation over an override tree.
//!
//! Two rules are hard invariants and abort with a [`CoreError`]: a base
//! theme must be present, and a `color` override must carry the
//! `neutral`, `primary` and `secondary` palettes. The aesthetic checks
//! (warmth, monospace font, non-black shadows) only produce
//! [`Advisory`] records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::base::BaseTheme;
use crate::color::{references_pure_black, Rgb, WARMTH_THRESHOLD};
use crate::error::CoreError;
use crate::tokens::{lookup_object, lookup_str, string_leaves};
use crate::types::TokenTree;

/// Palettes every retro `color` override must define.
pub const REQUIRED_PALETTES: &[&str] = &["neutral", "primary", "secondary"];

/// Font family substrings accepted as retro-appropriate.
pub const RETRO_FONT_MARKERS: &[&str] = &["monospace", "Courier"];

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Which soft policy check produced an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    ColdColor,
    NonMonospaceFont,
    PureBlackShadow,
}

/// A non-fatal diagnostic raised by a soft policy check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    /// Dotted path of the offending token, e.g. `color.palette.primary.500`.
    pub path: String,
    pub message: String,
}

/// Outcome of a successful validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub advisories: Vec<Advisory>,
}

impl ValidationReport {
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    pub fn of_kind(&self, kind: AdvisoryKind) -> impl Iterator<Item = &Advisory> {
        self.advisories.iter().filter(move |a| a.kind == kind)
    }

    /// Emit each advisory at `warn` level.
    pub fn log(&self) {
        for advisory in &self.advisories {
            tracing::warn!(kind = ?advisory.kind, path = %advisory.path, "{}", advisory.message);
        }
    }

    fn push(&mut self, kind: AdvisoryKind, path: String, message: String) {
        self.advisories.push(Advisory {
            kind,
            path,
            message,
        });
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run every rule against `overrides`.
///
/// Returns the collected advisories on success without logging them. Fails
/// on the first hard violation, in rule order.
pub fn validate_overrides(
    base_theme: Option<&dyn BaseTheme>,
    overrides: &TokenTree,
) -> Result<ValidationReport, CoreError> {
    validate_base_theme(base_theme)?;
    validate_required_palettes(overrides)?;

    let mut report = ValidationReport::default();
    check_color_warmth(overrides, &mut report);
    check_typography(overrides, &mut report);
    check_shadows(overrides, &mut report);
    Ok(report)
}

// ---------------------------------------------------------------------------
// Hard rules
// ---------------------------------------------------------------------------

fn validate_base_theme(base_theme: Option<&dyn BaseTheme>) -> Result<(), CoreError> {
    let theme = base_theme.ok_or_else(|| {
        CoreError::InvalidBaseTheme("retro theme must have a base theme".to_string())
    })?;
    if theme.version().trim().is_empty() {
        return Err(CoreError::InvalidBaseTheme(
            "base theme has no version identifier".to_string(),
        ));
    }
    Ok(())
}

/// Palettes may live under `color.palette` (builder output) or directly
/// under `color` (hand-written overrides). A `color` category that is not
/// an object defines no palettes at all.
fn validate_required_palettes(overrides: &TokenTree) -> Result<(), CoreError> {
    let color = match overrides.get("color") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Object(color)) => color,
        Some(_) => {
            return Err(CoreError::MissingRequiredPalette(
                REQUIRED_PALETTES[0].to_string(),
            ))
        }
    };
    let palette = color.get("palette").and_then(Value::as_object);

    for &name in REQUIRED_PALETTES {
        let found = palette.and_then(|p| p.get(name)).is_some_and(is_present)
            || color.get(name).is_some_and(is_present);
        if !found {
            return Err(CoreError::MissingRequiredPalette(name.to_string()));
        }
    }
    Ok(())
}

/// A token counts as defined unless it is `null`, `false` or `""`.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Advisory checks
// ---------------------------------------------------------------------------

fn check_color_warmth(overrides: &TokenTree, report: &mut ValidationReport) {
    let Some(color) = lookup_object(overrides, "color") else {
        return;
    };
    for (path, literal) in string_leaves(color, "color") {
        if !literal.starts_with('#') {
            continue;
        }
        // Unparseable hex leaves are not this check's concern.
        let Ok(rgb) = Rgb::from_hex(literal) else {
            continue;
        };
        let warmth = rgb.warmth_score();
        if warmth < WARMTH_THRESHOLD {
            report.push(
                AdvisoryKind::ColdColor,
                path.clone(),
                format!(
                    "Color {path} ({literal}) may not be warm enough for a retro theme (warmth {warmth:.2})"
                ),
            );
        }
    }
}

fn check_typography(overrides: &TokenTree, report: &mut ValidationReport) {
    let Some(family) = lookup_str(overrides, "typography.fontFamily.base") else {
        return;
    };
    if family.is_empty() {
        return;
    }
    if !RETRO_FONT_MARKERS.iter().any(|m| family.contains(m)) {
        report.push(
            AdvisoryKind::NonMonospaceFont,
            "typography.fontFamily.base".to_string(),
            format!("Font family '{family}' is not monospace; retro themes typically use Courier New"),
        );
    }
}

fn check_shadows(overrides: &TokenTree, report: &mut ValidationReport) {
    let Some(semantic) = lookup_object(overrides, "shadow.semantic") else {
        return;
    };
    for (size, value) in semantic {
        let Some(literal) = value.as_str() else {
            continue;
        };
        if references_pure_black(literal) {
            report.push(
                AdvisoryKind::PureBlackShadow,
                format!("shadow.semantic.{size}"),
                format!("Retro shadow {size} uses pure black; consider warm brown tones"),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

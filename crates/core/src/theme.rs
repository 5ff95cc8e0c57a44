//! The `RetroTheme` entity: a base theme plus a validated override tree.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::base::SharedBaseTheme;
use crate::error::CoreError;
use crate::events::ThemeEvent;
use crate::identity::EntityIdentity;
use crate::tokens::{category_names, deep_merge, lookup, lookup_str};
use crate::types::{ThemeId, Timestamp, TokenTree};
use crate::validation::{is_present, validate_overrides, Advisory, ValidationReport};

// ---------------------------------------------------------------------------
// Creation parameters
// ---------------------------------------------------------------------------

/// Parameters for [`RetroTheme::create`].
///
/// `base_theme` is optional only so that a missing base theme can be
/// reported as [`CoreError::InvalidBaseTheme`] instead of being
/// unrepresentable at the call site.
#[derive(Clone, Default)]
pub struct NewRetroTheme {
    pub id: Option<ThemeId>,
    pub base_theme: Option<SharedBaseTheme>,
    pub overrides: TokenTree,
    pub metadata: TokenTree,
}

impl NewRetroTheme {
    pub fn new(base_theme: SharedBaseTheme) -> Self {
        Self {
            base_theme: Some(base_theme),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: ThemeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_overrides(mut self, overrides: TokenTree) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_metadata(mut self, metadata: TokenTree) -> Self {
        self.metadata = metadata;
        self
    }
}

impl fmt::Debug for NewRetroTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRetroTheme")
            .field("id", &self.id)
            .field(
                "base_theme_version",
                &self.base_theme.as_ref().map(|t| t.version().to_string()),
            )
            .field("overrides", &self.overrides)
            .field("metadata", &self.metadata)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Characteristics
// ---------------------------------------------------------------------------

/// Informational labels describing which retro traits a theme carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Characteristic {
    MonospaceFont,
    WarmPalette,
    SoftShadows,
}

impl Characteristic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MonospaceFont => "monospace-font",
            Self::WarmPalette => "warm-palette",
            Self::SoftShadows => "soft-shadows",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Retro theme entity.
///
/// Wraps a shared base theme with an exclusively owned override tree. An
/// instance only exists once its overrides have passed validation, and
/// every mutation either fully applies or leaves the entity untouched.
#[derive(Clone)]
pub struct RetroTheme {
    identity: EntityIdentity,
    base_theme: SharedBaseTheme,
    overrides: TokenTree,
    metadata: TokenTree,
    advisories: Vec<Advisory>,
    /// Pending domain events, oldest first
    events: Vec<ThemeEvent>,
}

impl RetroTheme {
    /// Validate `params` and create the entity, queuing a `Created` event.
    pub fn create(params: NewRetroTheme) -> Result<Self, CoreError> {
        let NewRetroTheme {
            id,
            base_theme,
            overrides,
            metadata,
        } = params;

        let Some(base_theme) = base_theme else {
            return Err(CoreError::InvalidBaseTheme(
                "retro theme must have a base theme".to_string(),
            ));
        };
        let report = validate_overrides(Some(base_theme.as_ref()), &overrides)?;
        report.log();

        let identity = match id {
            Some(id) => EntityIdentity::with_id(id),
            None => EntityIdentity::generate(),
        };

        let mut theme = Self {
            identity,
            base_theme,
            overrides,
            metadata,
            advisories: report.advisories,
            events: Vec::new(),
        };

        let override_categories = category_names(&theme.overrides);
        tracing::debug!(
            theme_id = %theme.id(),
            base_version = theme.base_theme.version(),
            categories = ?override_categories,
            advisories = theme.advisories.len(),
            "Retro theme created",
        );

        theme.add_event(ThemeEvent::Created {
            theme_id: theme.id(),
            base_theme_version: theme.base_theme.version().to_string(),
            override_categories,
            timestamp: Utc::now(),
        });

        Ok(theme)
    }

    /// Base tokens with the override tree deep-merged on top.
    pub fn tokens(&self) -> TokenTree {
        deep_merge(&self.base_theme.tokens(), &self.overrides)
    }

    /// Copy of the override tree.
    pub fn overrides(&self) -> TokenTree {
        self.overrides.clone()
    }

    /// Replace the override tree wholesale.
    ///
    /// The new tree is validated first; on failure nothing changes.
    pub fn update_overrides(&mut self, overrides: TokenTree) -> Result<(), CoreError> {
        let report = validate_overrides(Some(self.base_theme.as_ref()), &overrides)?;
        report.log();

        let updated_categories = category_names(&overrides);
        self.overrides = overrides;
        self.advisories = report.advisories;
        self.identity.touch();

        tracing::debug!(
            theme_id = %self.id(),
            categories = ?updated_categories,
            advisories = self.advisories.len(),
            "Retro theme overrides updated",
        );

        self.add_event(ThemeEvent::OverridesUpdated {
            theme_id: self.id(),
            updated_categories,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Re-run validation against the current state. Advisories are returned,
    /// not logged.
    pub fn validate(&self) -> Result<ValidationReport, CoreError> {
        validate_overrides(Some(self.base_theme.as_ref()), &self.overrides)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Labels derived from which override sub-trees are populated.
    pub fn characteristics(&self) -> Vec<Characteristic> {
        let mut traits = Vec::new();

        if lookup_str(&self.overrides, "typography.fontFamily.base")
            .is_some_and(|family| family.contains("monospace"))
        {
            traits.push(Characteristic::MonospaceFont);
        }
        if lookup(&self.overrides, "color.palette.neutral").is_some_and(is_present) {
            traits.push(Characteristic::WarmPalette);
        }
        if lookup(&self.overrides, "shadow.semantic").is_some_and(is_present) {
            traits.push(Characteristic::SoftShadows);
        }

        traits
    }

    fn add_event(&mut self, event: ThemeEvent) {
        self.events.push(event);
    }

    /// Take all pending events (for publishing)
    pub fn take_events(&mut self) -> Vec<ThemeEvent> {
        std::mem::take(&mut self.events)
    }

    // Getters for read-only access
    pub fn id(&self) -> ThemeId {
        self.identity.id()
    }
    pub fn created_at(&self) -> Timestamp {
        self.identity.created_at()
    }
    pub fn updated_at(&self) -> Timestamp {
        self.identity.updated_at()
    }
    pub fn base_theme(&self) -> &SharedBaseTheme {
        &self.base_theme
    }
    pub fn metadata(&self) -> TokenTree {
        self.metadata.clone()
    }
    /// Advisories from the most recent successful validation.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }
}

impl PartialEq for RetroTheme {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for RetroTheme {}

impl fmt::Debug for RetroTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetroTheme")
            .field("identity", &self.identity)
            .field("base_theme_version", &self.base_theme.version())
            .field("overrides", &self.overrides)
            .field("metadata", &self.metadata)
            .field("advisories", &self.advisories)
            .field("pending_events", &self.events.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::StaticBaseTheme;
    use crate::validation::AdvisoryKind;
    use assert_matches::assert_matches;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;
    use uuid::Uuid;

    /// Counts `warn` events seen while installed.
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn tree(value: Value) -> TokenTree {
        value.as_object().cloned().expect("fixture must be an object")
    }

    fn base_theme() -> SharedBaseTheme {
        StaticBaseTheme::shared(
            "1.2.0",
            tree(json!({
                "color": {
                    "palette": {"primary": {"500": "#2563eb", "600": "#1d4ed8"}},
                    "text": {"primary": "#111827", "muted": "#6b7280"}
                },
                "spacing": {"sm": "4px", "md": "8px"},
                "typography": {"fontFamily": {"base": "Inter, sans-serif"}}
            })),
        )
    }

    fn retro_overrides() -> TokenTree {
        tree(json!({
            "color": {
                "palette": {
                    "neutral": {"500": "#f5f5f4"},
                    "primary": {"500": "#d35400", "600": "#d35400"},
                    "secondary": {"500": "#8b5e3c"}
                },
                "text": {"primary": "#3c1f0f"}
            },
            "typography": {"fontFamily": {"base": "Courier New, monospace"}},
            "shadow": {"semantic": {"sm": "0 1px 2px rgba(211, 84, 0, 0.25)"}}
        }))
    }

    fn create(overrides: TokenTree) -> Result<RetroTheme, CoreError> {
        RetroTheme::create(NewRetroTheme::new(base_theme()).with_overrides(overrides))
    }

    // -- create ----------------------------------------------------------

    #[test]
    fn create_without_base_theme_fails() {
        let result = RetroTheme::create(NewRetroTheme::default());
        assert_matches!(result, Err(CoreError::InvalidBaseTheme(_)));
    }

    #[test]
    fn create_with_defaults_succeeds() {
        let theme = RetroTheme::create(NewRetroTheme::new(base_theme())).unwrap();
        assert!(theme.overrides().is_empty());
        assert!(theme.metadata().is_empty());
        assert_eq!(theme.created_at(), theme.updated_at());
    }

    #[test]
    fn create_emits_created_event_with_categories() {
        let mut theme = create(retro_overrides()).unwrap();
        let events = theme.take_events();
        assert_eq!(events.len(), 1);
        assert_matches!(
            &events[0],
            ThemeEvent::Created { theme_id, base_theme_version, override_categories, .. }
                if *theme_id == theme.id()
                    && base_theme_version == "1.2.0"
                    && override_categories == &["color", "typography", "shadow"]
        );
    }

    #[test]
    fn create_honours_explicit_id() {
        let id = Uuid::now_v7();
        let theme =
            RetroTheme::create(NewRetroTheme::new(base_theme()).with_id(id)).unwrap();
        assert_eq!(theme.id(), id);
    }

    #[test]
    fn create_rejects_incomplete_color_override() {
        let overrides = tree(json!({"color": {"palette": {
            "neutral": {"500": "#f5f5f4"},
            "primary": {"500": "#d35400"}
        }}}));
        assert_matches!(
            create(overrides),
            Err(CoreError::MissingRequiredPalette(name)) if name == "secondary"
        );
    }

    #[test]
    fn create_records_advisories_without_failing() {
        let mut overrides = retro_overrides();
        overrides.insert(
            "typography".into(),
            json!({"fontFamily": {"base": "Georgia, serif"}}),
        );
        let theme = create(overrides).unwrap();
        assert_eq!(theme.advisories().len(), 1);
        assert_eq!(theme.advisories()[0].kind, AdvisoryKind::NonMonospaceFont);
    }

    #[test]
    fn create_rejects_non_object_color_category() {
        for color in [json!("red"), json!([])] {
            assert_matches!(
                create(tree(json!({ "color": color }))),
                Err(CoreError::MissingRequiredPalette(name)) if name == "neutral"
            );
        }
    }

    #[test]
    fn advisories_are_logged_on_mutation_only() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let serif = tree(json!({"typography": {"fontFamily": {"base": "Georgia, serif"}}}));
            let mut theme = create(serif.clone()).unwrap();
            assert_eq!(warnings.load(Ordering::SeqCst), 1);

            assert!(theme.is_valid());
            assert_eq!(theme.validate().unwrap().advisories.len(), 1);
            assert_eq!(warnings.load(Ordering::SeqCst), 1);

            theme.update_overrides(serif).unwrap();
            assert_eq!(warnings.load(Ordering::SeqCst), 2);
        });
    }

    // -- tokens ----------------------------------------------------------

    #[test]
    fn tokens_merge_overrides_over_base() {
        let theme = create(retro_overrides()).unwrap();
        let tokens = theme.tokens();
        assert_eq!(tokens["color"]["palette"]["primary"]["500"], "#d35400");
        assert_eq!(tokens["color"]["text"]["primary"], "#3c1f0f");
        assert_eq!(tokens["color"]["text"]["muted"], "#6b7280");
        assert_eq!(tokens["spacing"]["md"], "8px");
        assert_eq!(
            tokens["typography"]["fontFamily"]["base"],
            "Courier New, monospace"
        );
    }

    #[test]
    fn tokens_are_idempotent() {
        let theme = create(retro_overrides()).unwrap();
        assert_eq!(theme.tokens(), theme.tokens());
    }

    // -- overrides -------------------------------------------------------

    #[test]
    fn overrides_returns_defensive_copy() {
        let theme = create(retro_overrides()).unwrap();
        let mut copy = theme.overrides();
        copy.remove("color");
        copy.insert("radius".into(), json!({"sm": "0px"}));
        assert_eq!(theme.overrides(), retro_overrides());
    }

    #[test]
    fn update_replaces_rather_than_merges() {
        let mut theme = create(retro_overrides()).unwrap();
        let replacement = tree(json!({"shadow": {"semantic": {"md": "0 4px 6px rgba(139, 94, 60, 0.35)"}}}));
        theme.update_overrides(replacement.clone()).unwrap();
        assert_eq!(theme.overrides(), replacement);
        assert!(theme.tokens()["color"]["palette"]["primary"]["500"] == "#2563eb");
    }

    #[test]
    fn failed_update_leaves_state_unchanged() {
        let mut theme = create(retro_overrides()).unwrap();
        theme.take_events();
        let before = theme.overrides();
        let updated_before = theme.updated_at();

        let invalid = tree(json!({"color": {"palette": {"primary": {"500": "#d35400"}}}}));
        assert_matches!(
            theme.update_overrides(invalid),
            Err(CoreError::MissingRequiredPalette(_))
        );

        assert_eq!(theme.overrides(), before);
        assert_eq!(theme.updated_at(), updated_before);
        assert!(theme.take_events().is_empty());
    }

    #[test]
    fn update_rejects_non_object_color_category() {
        let mut theme = create(retro_overrides()).unwrap();
        theme.take_events();

        for color in [json!("red"), json!([])] {
            assert_matches!(
                theme.update_overrides(tree(json!({ "color": color }))),
                Err(CoreError::MissingRequiredPalette(name)) if name == "neutral"
            );
        }

        assert_eq!(theme.overrides(), retro_overrides());
        assert_eq!(theme.tokens()["color"]["palette"]["primary"]["500"], "#d35400");
        assert!(theme.take_events().is_empty());
    }

    #[test]
    fn update_bumps_timestamp_and_refreshes_advisories() {
        let mut theme = create(retro_overrides()).unwrap();
        assert!(theme.advisories().is_empty());
        let created_at = theme.created_at();

        theme
            .update_overrides(tree(json!({"shadow": {"semantic": {"sm": "0 1px 2px #000"}}})))
            .unwrap();

        assert_eq!(theme.created_at(), created_at);
        assert!(theme.updated_at() >= created_at);
        assert_eq!(theme.advisories().len(), 1);
        assert_eq!(theme.advisories()[0].kind, AdvisoryKind::PureBlackShadow);
    }

    // -- events ----------------------------------------------------------

    #[test]
    fn events_accumulate_in_order_and_drain() {
        let mut theme = create(retro_overrides()).unwrap();
        theme
            .update_overrides(tree(json!({"typography": {"fontFamily": {"base": "monospace"}}})))
            .unwrap();

        let events = theme.take_events();
        assert_eq!(events.len(), 2);
        assert_matches!(events[0], ThemeEvent::Created { .. });
        assert_matches!(
            &events[1],
            ThemeEvent::OverridesUpdated { updated_categories, .. }
                if updated_categories == &["typography"]
        );
        assert!(theme.take_events().is_empty());
    }

    // -- derived views ---------------------------------------------------

    #[test]
    fn characteristics_reflect_populated_subtrees() {
        let theme = create(retro_overrides()).unwrap();
        assert_eq!(
            theme.characteristics(),
            vec![
                Characteristic::MonospaceFont,
                Characteristic::WarmPalette,
                Characteristic::SoftShadows,
            ]
        );

        let bare = create(TokenTree::new()).unwrap();
        assert!(bare.characteristics().is_empty());
    }

    #[test]
    fn blank_subtrees_do_not_count_as_characteristics() {
        let theme = create(tree(json!({
            "color": {
                "neutral": {"500": "#f5f5f4"},
                "primary": {"500": "#d35400"},
                "secondary": {"500": "#8b5e3c"},
                "palette": {"neutral": ""}
            },
            "shadow": {"semantic": false}
        })))
        .unwrap();
        assert!(theme.characteristics().is_empty());
    }

    #[test]
    fn courier_without_monospace_is_not_labelled_monospace() {
        let theme = create(tree(json!({"typography": {"fontFamily": {"base": "Courier New"}}}))).unwrap();
        assert!(!theme.characteristics().contains(&Characteristic::MonospaceFont));
    }

    #[test]
    fn characteristic_labels_are_kebab_case() {
        assert_eq!(Characteristic::WarmPalette.to_string(), "warm-palette");
        assert_eq!(
            serde_json::to_value(Characteristic::SoftShadows).unwrap(),
            "soft-shadows"
        );
    }

    #[test]
    fn existing_theme_is_valid() {
        let theme = create(retro_overrides()).unwrap();
        assert!(theme.is_valid());
    }

    #[test]
    fn equality_is_by_identity() {
        let a = create(retro_overrides()).unwrap();
        let b = a.clone();
        let c = create(retro_overrides()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

/// Theme entity identifiers are time-ordered UUIDv7 values.
pub type ThemeId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A nested design-token mapping keyed by category, role, or scale step.
///
/// Scale steps are string keys (`"50"`, `"500"`); leaves are usually CSS
/// literals stored as JSON strings.
pub type TokenTree = serde_json::Map<String, serde_json::Value>;

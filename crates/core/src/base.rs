//! Base-theme collaborator contracts.
//!
//! A retro theme always sits on top of a base theme produced by some
//! external builder. This module only defines what the retro layer needs
//! from it: a version identifier and a token-tree snapshot.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::TokenTree;

/// A finished base theme. Read-only from the retro layer's perspective.
pub trait BaseTheme: Send + Sync {
    /// Version identifier of the base theme (e.g. `"1.0.0"`).
    fn version(&self) -> &str;

    /// Snapshot of the full token tree.
    fn tokens(&self) -> TokenTree;
}

/// Base themes are shared, never copied.
pub type SharedBaseTheme = Arc<dyn BaseTheme>;

/// Seed values handed to a [`BaseThemeBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseThemeInput {
    #[serde(default)]
    pub color: Value,
    #[serde(default)]
    pub spacing: Value,
    #[serde(default)]
    pub typography: Value,
}

/// Produces base themes from seed input.
pub trait BaseThemeBuilder: Send + Sync {
    fn build_theme(&self, input: &BaseThemeInput) -> Result<SharedBaseTheme, CoreError>;
}

/// In-memory base theme holding a fixed token tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticBaseTheme {
    version: String,
    tokens: TokenTree,
}

impl StaticBaseTheme {
    pub fn new(version: impl Into<String>, tokens: TokenTree) -> Self {
        Self {
            version: version.into(),
            tokens,
        }
    }

    /// Convenience for wrapping straight into a [`SharedBaseTheme`].
    pub fn shared(version: impl Into<String>, tokens: TokenTree) -> SharedBaseTheme {
        Arc::new(Self::new(version, tokens))
    }
}

impl BaseTheme for StaticBaseTheme {
    fn version(&self) -> &str {
        &self.version
    }

    fn tokens(&self) -> TokenTree {
        self.tokens.clone()
    }
}

//! Identity and timestamps shared by domain entities.
//!
//! Entities embed an [`EntityIdentity`] rather than inheriting from a base
//! type. Equality of an entity is equality of its id.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ThemeId, Timestamp};

/// Immutable id plus creation / last-modification timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIdentity {
    id: ThemeId,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl EntityIdentity {
    /// Fresh identity with a generated UUIDv7.
    pub fn generate() -> Self {
        Self::with_id(Uuid::now_v7())
    }

    /// Identity with a caller-supplied id. Both timestamps are set to now.
    pub fn with_id(id: ThemeId) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ThemeId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Bump `updated_at` after a mutation. Never moves backwards.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

impl PartialEq for EntityIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityIdentity {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identities_are_distinct() {
        let a = EntityIdentity::generate();
        let b = EntityIdentity::generate();
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_identity_has_equal_timestamps() {
        let identity = EntityIdentity::generate();
        assert_eq!(identity.created_at(), identity.updated_at());
    }

    #[test]
    fn touch_keeps_created_at_and_never_rewinds() {
        let mut identity = EntityIdentity::generate();
        let created = identity.created_at();
        let before = identity.updated_at();
        identity.touch();
        assert_eq!(identity.created_at(), created);
        assert!(identity.updated_at() >= before);
    }

    #[test]
    fn equality_ignores_timestamps() {
        let id = Uuid::now_v7();
        let a = EntityIdentity::with_id(id);
        let mut b = EntityIdentity::with_id(id);
        b.touch();
        assert_eq!(a, b);
    }
}

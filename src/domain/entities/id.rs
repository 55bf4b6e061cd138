//! Identifiers and reference wrappers shared by all catalog entities.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Parses an identifier from form text.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// `{ "id": .. }` wrapper used by write payloads to point at another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    /// Referenced record.
    pub id: EntityId,
}

impl IdRef {
    /// Creates a new reference.
    #[must_use]
    pub const fn new(id: EntityId) -> Self {
        Self { id }
    }
}

/// Nested record embedded in a read representation.
///
/// Only the identifier and display name are kept; any other nested fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Identifier of the nested record.
    pub id: EntityId,
    /// Display name, empty when the backend omits it.
    #[serde(default)]
    pub name: String,
}

impl NamedRef {
    #[must_use]
    /// Creates a nested record reference.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Records that carry a server-assigned identifier.
pub trait Identified {
    /// Returns the record identifier.
    fn id(&self) -> EntityId;
}

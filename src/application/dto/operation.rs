//! Requests and results exchanged between screens and the resource use case.

use std::collections::BTreeMap;

use crate::domain::ActionKind;
use crate::domain::entities::{EntityId, NamedRef};
use crate::domain::errors::ApiError;
use crate::domain::resource::{Resource, ResourceKind};

/// Record an operation is aimed at. Used as the in-flight guard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationTarget {
    /// A record that does not exist yet.
    New,
    /// An existing record.
    Entity(EntityId),
}

impl std::fmt::Display for OperationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Entity(id) => write!(f, "{id}"),
        }
    }
}

/// Write request against one collection.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum Operation<R: Resource> {
    Create(R::Payload),
    Update(EntityId, R::Payload),
    Delete(EntityId),
}

impl<R: Resource> Operation<R> {
    /// Returns the record the operation is aimed at.
    #[must_use]
    pub const fn target(&self) -> OperationTarget {
        match self {
            Self::Create(_) => OperationTarget::New,
            Self::Update(id, _) | Self::Delete(id) => OperationTarget::Entity(*id),
        }
    }

    /// Returns the action recorded when the operation succeeds.
    #[must_use]
    pub const fn action(&self) -> ActionKind {
        match self {
            Self::Create(_) => ActionKind::Add,
            Self::Update(..) => ActionKind::Update,
            Self::Delete(_) => ActionKind::Delete,
        }
    }
}

/// Successful result of an operation.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum Completed<R: Resource> {
    Created(R::Entity),
    Updated(R::Entity),
    Deleted(EntityId),
}

/// Result of an operation, tagged with what it was aimed at.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub struct OperationOutcome<R: Resource> {
    pub target: OperationTarget,
    pub action: ActionKind,
    pub result: Result<Completed<R>, ApiError>,
}

/// Selectable `{id, name}` records for every reference field of a screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceOptions {
    by_kind: BTreeMap<ResourceKind, Vec<NamedRef>>,
}

impl ReferenceOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the options of one kind, empty when not loaded.
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> &[NamedRef] {
        self.by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Returns whether the identifier is one of the options of a kind.
    #[must_use]
    pub fn contains(&self, kind: ResourceKind, id: EntityId) -> bool {
        self.get(kind).iter().any(|option| option.id == id)
    }

    /// Returns the display name of a referenced record.
    #[must_use]
    pub fn label_for(&self, kind: ResourceKind, id: EntityId) -> Option<&str> {
        self.get(kind)
            .iter()
            .find(|option| option.id == id)
            .map(|option| option.name.as_str())
    }

    /// Removes every option.
    pub fn clear(&mut self) {
        self.by_kind.clear();
    }
}

impl FromIterator<(ResourceKind, Vec<NamedRef>)> for ReferenceOptions {
    fn from_iter<I: IntoIterator<Item = (ResourceKind, Vec<NamedRef>)>>(iter: I) -> Self {
        Self {
            by_kind: iter.into_iter().collect(),
        }
    }
}

/// Side of an independent load that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPart {
    /// The collection's own record list.
    Records,
    /// One of the reference lists.
    References,
}

/// Everything fetched when a screen is opened.
#[derive(Debug, Clone)]
pub struct LoadedData<R: Resource> {
    /// Records of the collection, empty when their fetch failed.
    pub records: Vec<R::Entity>,
    /// Reference options, empty when their fetch failed.
    pub references: ReferenceOptions,
    /// Set when one side of an independent load failed.
    pub failed: Option<LoadPart>,
}

impl<R: Resource> LoadedData<R> {
    /// Creates a fully successful load.
    #[must_use]
    pub const fn new(records: Vec<R::Entity>, references: ReferenceOptions) -> Self {
        Self {
            records,
            references,
            failed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Categories;

    #[test]
    fn test_operation_target_and_action() {
        let delete: Operation<Categories> = Operation::Delete(EntityId(9));
        assert_eq!(delete.target(), OperationTarget::Entity(EntityId(9)));
        assert_eq!(delete.action(), ActionKind::Delete);
    }

    #[test]
    fn test_reference_labels() {
        let options: ReferenceOptions = [(
            ResourceKind::Author,
            vec![NamedRef::new(1, "Orhan Pamuk"), NamedRef::new(2, "Elif Shafak")],
        )]
        .into_iter()
        .collect();

        assert_eq!(
            options.label_for(ResourceKind::Author, EntityId(2)),
            Some("Elif Shafak")
        );
        assert_eq!(options.label_for(ResourceKind::Author, EntityId(3)), None);
        assert!(options.contains(ResourceKind::Author, EntityId(1)));
        assert!(!options.contains(ResourceKind::Publisher, EntityId(1)));
        assert!(options.get(ResourceKind::Book).is_empty());
    }
}

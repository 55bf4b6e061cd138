//! Keyed, ordered in-memory list of records.

use std::collections::HashMap;

use crate::domain::entities::{EntityId, Identified};

/// Client-side copy of a collection.
///
/// Records are indexed by identifier and kept in insertion order. The only
/// mutations are whole-list replacement, upsert and removal by key, so the
/// list always holds at most one record per identifier.
#[derive(Debug, Clone)]
pub struct EntityList<E> {
    entries: HashMap<EntityId, E>,
    order: Vec<EntityId>,
}

impl<E: Identified> EntityList<E> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Replaces the whole list with a freshly fetched one.
    ///
    /// When the backend repeats an identifier, the later record wins and keeps
    /// the position of the first occurrence.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = E>) {
        self.entries.clear();
        self.order.clear();
        for record in records {
            self.upsert(record);
        }
    }

    /// Appends a new record, or replaces the record with the same identifier
    /// in place.
    ///
    /// Returns `true` when the record was appended.
    pub fn upsert(&mut self, record: E) -> bool {
        let id = record.id();
        let is_new = self.entries.insert(id, record).is_none();
        if is_new {
            self.order.push(id);
        }
        is_new
    }

    /// Replaces an existing record in place. Unknown identifiers are ignored.
    ///
    /// Returns `true` when a record was replaced.
    pub fn replace_existing(&mut self, record: E) -> bool {
        match self.entries.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes a record, keeping the relative order of the others.
    pub fn remove(&mut self, id: EntityId) -> Option<E> {
        let removed = self.entries.remove(&id)?;
        self.order.retain(|existing| *existing != id);
        Some(removed)
    }

    /// Returns a record by identifier.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.entries.get(&id)
    }

    /// Returns the record at a display position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&E> {
        self.order.get(index).and_then(|id| self.entries.get(id))
    }

    /// Returns whether a record with this identifier is present.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Iterates records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Returns identifiers in display order.
    #[must_use]
    pub fn ids(&self) -> &[EntityId] {
        &self.order
    }
}

impl<E: Identified> Default for EntityList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Identified> FromIterator<E> for EntityList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        list.replace_all(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: EntityId,
        label: &'static str,
    }

    impl Identified for Row {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn row(id: u64, label: &'static str) -> Row {
        Row {
            id: EntityId(id),
            label,
        }
    }

    fn labels(list: &EntityList<Row>) -> Vec<&'static str> {
        list.iter().map(|r| r.label).collect()
    }

    #[test]
    fn test_upsert_appends_new_records() {
        let mut list: EntityList<Row> = [row(1, "a"), row(2, "b")].into_iter().collect();

        assert!(list.upsert(row(7, "c")));
        assert_eq!(labels(&list), vec!["a", "b", "c"]);
        assert_eq!(list.iter().filter(|r| r.id == EntityId(7)).count(), 1);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut list: EntityList<Row> = [row(1, "a"), row(2, "b"), row(3, "c")]
            .into_iter()
            .collect();

        assert!(!list.upsert(row(2, "B")));
        assert_eq!(labels(&list), vec!["a", "B", "c"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_replace_existing_ignores_unknown() {
        let mut list: EntityList<Row> = [row(1, "a")].into_iter().collect();

        assert!(!list.replace_existing(row(5, "x")));
        assert_eq!(list.len(), 1);
        assert!(list.replace_existing(row(1, "A")));
        assert_eq!(labels(&list), vec!["A"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut list: EntityList<Row> = [row(1, "a"), row(2, "b"), row(3, "c"), row(4, "d")]
            .into_iter()
            .collect();

        assert_eq!(list.remove(EntityId(2)), Some(row(2, "b")));
        assert_eq!(labels(&list), vec!["a", "c", "d"]);
        assert!(!list.contains(EntityId(2)));
        assert_eq!(list.remove(EntityId(2)), None);
    }

    #[test]
    fn test_replace_all_collapses_duplicate_ids() {
        let mut list = EntityList::new();
        list.replace_all([row(1, "a"), row(2, "b"), row(1, "a2")]);

        assert_eq!(labels(&list), vec!["a2", "b"]);
        assert_eq!(list.ids(), &[EntityId(1), EntityId(2)]);
    }

    #[test]
    fn test_index_access() {
        let list: EntityList<Row> = [row(10, "x"), row(20, "y")].into_iter().collect();

        assert_eq!(list.get_index(1).map(|r| r.label), Some("y"));
        assert!(list.get_index(2).is_none());
        assert_eq!(list.get(EntityId(10)).map(|r| r.label), Some("x"));
    }
}

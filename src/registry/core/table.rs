use uuid::Uuid;

use super::entity::{Entity, EntityId, RowKey};

// ============================================================================
// Entity Table - append-only storage for one entity type
// ============================================================================

#[derive(Debug, Clone)]
pub struct EntityTable<T: Entity> {
    registry: Uuid,
    rows: Vec<T>,
}

impl<T: Entity> EntityTable<T> {
    pub fn new(registry: Uuid) -> Self {
        Self {
            registry,
            rows: Vec::new(),
        }
    }

    pub fn registry(&self) -> Uuid {
        self.registry
    }

    /// Register a new row; `build` receives the handle the row will live under
    pub fn insert_with(&mut self, build: impl FnOnce(T::Id) -> T) -> T::Id {
        let id = T::Id::from_key(RowKey {
            registry: self.registry,
            index: self.rows.len(),
        });
        self.rows.push(build(id));
        id
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        let key = id.key();
        if key.registry != self.registry {
            return None;
        }
        self.rows.get(key.index)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        let key = id.key();
        if key.registry != self.registry {
            return None;
        }
        self.rows.get_mut(key.index)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Rows in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct TestId(RowKey);

    impl EntityId for TestId {
        fn from_key(key: RowKey) -> Self {
            Self(key)
        }

        fn key(&self) -> RowKey {
            self.0
        }
    }

    #[derive(Debug)]
    struct TestRow {
        id: TestId,
        label: String,
    }

    impl Entity for TestRow {
        type Id = TestId;

        fn id(&self) -> TestId {
            self.id
        }

        fn kind() -> &'static str {
            "test_row"
        }
    }

    fn row(label: &str) -> impl FnOnce(TestId) -> TestRow + '_ {
        move |id| TestRow {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_insert_assigns_sequential_handles() {
        let mut table = EntityTable::<TestRow>::new(Uuid::new_v4());
        let first = table.insert_with(row("a"));
        let second = table.insert_with(row("b"));

        assert_eq!(first.key().index, 0);
        assert_eq!(second.key().index, 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(second).unwrap().label, "b");
        assert_eq!(table.get(first).unwrap().id(), first);
    }

    #[test]
    fn test_foreign_handle_does_not_resolve() {
        let mut ours = EntityTable::<TestRow>::new(Uuid::new_v4());
        let mut theirs = EntityTable::<TestRow>::new(Uuid::new_v4());
        ours.insert_with(row("ours"));
        let foreign = theirs.insert_with(row("theirs"));

        // same index, different registry
        assert_eq!(foreign.key().index, 0);
        assert!(!ours.contains(foreign));
        assert!(ours.get_mut(foreign).is_none());
    }

    #[test]
    fn test_out_of_range_handle_does_not_resolve() {
        let registry = Uuid::new_v4();
        let table = EntityTable::<TestRow>::new(registry);
        let forged = TestId::from_key(RowKey { registry, index: 7 });

        assert!(table.is_empty());
        assert!(table.get(forged).is_none());
    }

    #[test]
    fn test_get_mut_updates_row() {
        let mut table = EntityTable::<TestRow>::new(Uuid::new_v4());
        let id = table.insert_with(row("before"));
        table.get_mut(id).unwrap().label = "after".to_string();

        let labels: Vec<_> = table.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["after"]);
    }
}

use std::sync::Arc;

use crate::models::{Entity, EntityId, Placement};

/// An ordered, copy-on-write list of records.
///
/// Every mutation swaps in a new `Arc`, so holders of an older snapshot can
/// detect change with `Arc::ptr_eq`.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Arc<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn max_id(&self) -> Option<EntityId> {
        self.items.iter().map(Entity::id).max()
    }

    pub(crate) fn insert(&mut self, record: T) {
        let mut next = Vec::with_capacity(self.items.len() + 1);
        match T::KIND.placement() {
            Placement::Prepend => {
                next.push(record);
                next.extend(self.items.iter().cloned());
            }
            Placement::Append => {
                next.extend(self.items.iter().cloned());
                next.push(record);
            }
        }
        self.items = Arc::new(next);
    }

    /// Returns whether a record with a matching id was found.
    pub(crate) fn replace(&mut self, record: T) -> bool {
        let id = record.id();
        let mut found = false;
        let next = self
            .items
            .iter()
            .map(|item| {
                if item.id() == id {
                    found = true;
                    record.clone()
                } else {
                    item.clone()
                }
            })
            .collect();
        self.items = Arc::new(next);
        found
    }

    /// Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        let before = self.items.len();
        let next: Vec<T> = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        let removed = next.len() != before;
        self.items = Arc::new(next);
        removed
    }
}

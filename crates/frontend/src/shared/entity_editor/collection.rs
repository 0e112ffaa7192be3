use contracts::domain::common::{Entity, EntityId};

/// Local copy of a server collection.
///
/// Never patched in place: the only mutation is [`EntityCache::replace`] with
/// a snapshot the server returned. Server order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCache<E> {
    entries: Vec<E>,
}

impl<E> Default for EntityCache<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E: Entity + Clone> EntityCache<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, snapshot: Vec<E>) {
        self.entries = snapshot;
    }

    pub fn get(&self, id: &EntityId) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<E> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

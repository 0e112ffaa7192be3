use contracts::domain::common::{Entity, EntityId};

/// Parent selection, child options and child selection kept together.
///
/// Invariant: `child` is either `None` or the id of an entry in `options`,
/// and `options` only ever hold the server result for the current `parent`.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeState<C> {
    parent: Option<EntityId>,
    options: Vec<C>,
    child: Option<EntityId>,
}

impl<C> Default for CascadeState<C> {
    fn default() -> Self {
        Self {
            parent: None,
            options: Vec::new(),
            child: None,
        }
    }
}

impl<C: Entity + Clone> CascadeState<C> {
    /// Change the parent. Clears the child and its options; returns the parent
    /// to fetch options for, if any. Re-selecting the same parent is a no-op.
    pub fn select_parent(&mut self, parent: Option<EntityId>) -> Option<EntityId> {
        if self.parent == parent {
            return None;
        }
        self.parent = parent;
        self.child = None;
        self.options.clear();
        self.parent.clone()
    }

    /// Accept options fetched for `requested_for`. A response for a parent that
    /// is no longer selected is dropped and `false` returned.
    pub fn accept_options(&mut self, requested_for: &EntityId, options: Vec<C>) -> bool {
        if self.parent.as_ref() != Some(requested_for) {
            return false;
        }
        self.options = options;
        self.child = None;
        true
    }

    /// Select a child. Only ids among the current options are accepted.
    pub fn select_child(&mut self, child: Option<EntityId>) -> bool {
        match child {
            None => {
                self.child = None;
                true
            }
            Some(id) if self.options.iter().any(|o| o.id() == &id) => {
                self.child = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    pub fn parent(&self) -> Option<&EntityId> {
        self.parent.as_ref()
    }

    pub fn child(&self) -> Option<&EntityId> {
        self.child.as_ref()
    }

    pub fn options(&self) -> &[C] {
        &self.options
    }

    /// Child selector is interactive only while a parent is chosen
    pub fn is_child_enabled(&self) -> bool {
        self.parent.is_some()
    }
}

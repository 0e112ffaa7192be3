use super::state::CascadeState;
use crate::shared::api_error::RequestError;
use crate::shared::lifecycle::MountGuard;
use crate::shared::reporting::FailureSink;
use async_trait::async_trait;
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use std::sync::Arc;

/// Source of child options filtered by parent
#[async_trait(?Send)]
pub trait ChildSource<C> {
    async fn children_of(&self, parent: &EntityId) -> Result<Vec<C>, RequestError>;
}

/// Drives a [`CascadeState`]: one fetch per parent change, no retries.
pub struct CascadingSelector<C, S> {
    pub state: RwSignal<CascadeState<C>>,
    source: Arc<S>,
    sink: Arc<dyn FailureSink>,
    guard: MountGuard,
}

impl<C, S> Clone for CascadingSelector<C, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            source: Arc::clone(&self.source),
            sink: Arc::clone(&self.sink),
            guard: self.guard.clone(),
        }
    }
}

impl<C, S> CascadingSelector<C, S>
where
    C: Entity + Clone + Send + Sync + 'static,
    S: ChildSource<C> + 'static,
{
    pub fn new(source: Arc<S>, sink: Arc<dyn FailureSink>, guard: MountGuard) -> Self {
        Self {
            state: RwSignal::new(CascadeState::default()),
            source,
            sink,
            guard,
        }
    }

    pub async fn select_parent(&self, parent: Option<EntityId>) {
        let Some(requested_for) = self.state.try_update(|s| s.select_parent(parent)).flatten()
        else {
            return;
        };

        let result = self.source.children_of(&requested_for).await;
        if !self.guard.is_mounted() {
            return;
        }
        match result {
            Ok(options) => {
                let accepted = self
                    .state
                    .try_update(|s| s.accept_options(&requested_for, options))
                    .unwrap_or(false);
                if !accepted {
                    log::debug!("options for {} arrived after selection changed", requested_for);
                }
            }
            Err(e) => self.sink.report("places by district", &e),
        }
    }

    pub fn select_child(&self, child: Option<EntityId>) {
        self.state.update(|s| {
            if !s.select_child(child) {
                log::warn!("ignored selection outside current options");
            }
        });
    }

    pub fn select_parent_command(&self, parent: Option<EntityId>) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.select_parent(parent).await });
    }
}

use super::collection::EntityCache;
use super::session::{EditSession, SaveTarget, SessionEvent};
use super::traits::{CollectionApi, EditableEntity};
use crate::shared::api_error::RequestError;
use crate::shared::lifecycle::MountGuard;
use crate::shared::reporting::FailureSink;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use std::sync::Arc;

/// Everything one list editor renders
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState<E: EditableEntity> {
    pub items: EntityCache<E>,
    pub session: EditSession<E::Draft>,
}

impl<E: EditableEntity> Default for EditorState<E> {
    fn default() -> Self {
        Self {
            items: EntityCache::default(),
            session: EditSession::default(),
        }
    }
}

/// Controller for one Entity List Editor instance.
///
/// Every `load`/`save`/`delete` is exactly one round trip. Successful
/// responses replace the whole collection; failures leave state untouched
/// and go to the failure sink. Responses are applied in arrival order.
pub struct ListEditor<E: EditableEntity, A> {
    pub state: RwSignal<EditorState<E>>,
    api: Arc<A>,
    sink: Arc<dyn FailureSink>,
    guard: MountGuard,
}

impl<E: EditableEntity, A> Clone for ListEditor<E, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            api: Arc::clone(&self.api),
            sink: Arc::clone(&self.sink),
            guard: self.guard.clone(),
        }
    }
}

impl<E, A> ListEditor<E, A>
where
    E: EditableEntity,
    A: CollectionApi<E> + 'static,
{
    pub fn new(api: Arc<A>, sink: Arc<dyn FailureSink>) -> Self {
        Self {
            state: RwSignal::new(EditorState::default()),
            api,
            sink,
            guard: MountGuard::new(),
        }
    }

    /// Released by the owning component on unmount
    pub fn guard(&self) -> MountGuard {
        self.guard.clone()
    }

    pub fn items(&self) -> Vec<E> {
        self.state.with(|s| s.items.to_vec())
    }

    pub fn draft(&self) -> E::Draft {
        self.state.with(|s| s.session.draft().clone())
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.session.is_editing())
    }

    /// Load a listed row into the form. Unknown ids are ignored.
    pub fn start_edit(&self, id: &EntityId) {
        let draft = self
            .state
            .with_untracked(|s| s.items.get(id).map(EditableEntity::to_draft));
        if let Some(draft) = draft {
            self.transition(SessionEvent::StartEdit {
                id: id.clone(),
                draft,
            });
        }
    }

    pub fn cancel_edit(&self) {
        self.transition(SessionEvent::Cancel);
    }

    pub fn edit_draft(&self, f: impl FnOnce(&mut E::Draft)) {
        self.state.update(|s| f(s.session.draft_mut()));
    }

    pub async fn load(&self) {
        let result = self.api.list().await;
        self.settle(Self::operation("load"), result, None);
    }

    pub async fn save(&self) {
        let (target, draft) = self.state.with_untracked(|s| match &s.session {
            EditSession::Editing { id, draft } => (SaveTarget::Update(id.clone()), draft.clone()),
            EditSession::Creating(draft) => (SaveTarget::Create, draft.clone()),
        });

        let result = match &target {
            SaveTarget::Update(id) => self.api.update(id, &draft).await,
            SaveTarget::Create => {
                if !E::is_submittable(&draft) {
                    return;
                }
                self.api.create(&draft).await
            }
        };
        let operation = match &target {
            SaveTarget::Update(_) => Self::operation("update"),
            SaveTarget::Create => Self::operation("create"),
        };
        self.settle(operation, result, Some(SessionEvent::Committed(target)));
    }

    pub async fn delete(&self, id: EntityId) {
        let result = self.api.delete(&id).await;
        self.settle(Self::operation("delete"), result, Some(SessionEvent::Deleted(id)));
    }

    pub fn load_command(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.load().await });
    }

    pub fn save_command(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.save().await });
    }

    pub fn delete_command(&self, id: EntityId) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.delete(id).await });
    }

    fn operation(verb: &str) -> String {
        format!("{} {}", E::collection_name(), verb)
    }

    fn transition(&self, event: SessionEvent<E::Draft>) {
        self.state.update(|s| {
            let session = std::mem::take(&mut s.session);
            s.session = session.apply(event);
        });
    }

    fn settle(
        &self,
        operation: String,
        result: Result<Vec<E>, RequestError>,
        event: Option<SessionEvent<E::Draft>>,
    ) {
        if !self.guard.is_mounted() {
            log::debug!("{}: response after unmount dropped", operation);
            return;
        }
        match result {
            Ok(snapshot) => {
                self.state.try_update(|s| {
                    s.items.replace(snapshot);
                    if let Some(event) = event {
                        let session = std::mem::take(&mut s.session);
                        s.session = session.apply(event);
                    }
                });
            }
            Err(e) => self.sink.report(&operation, &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::reporting::testing::RecordingSink;
    use async_trait::async_trait;
    use contracts::domain::a001_district::aggregate::{District, DistrictDto};
    use contracts::domain::a002_place::aggregate::{Place, PlaceDto};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// In-memory stand-in for the remote collection
    struct FakeServer<E> {
        rows: RefCell<Vec<E>>,
        calls: Cell<usize>,
        failing: Cell<bool>,
        next_id: Cell<u32>,
        before_reply: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl<E> FakeServer<E> {
        fn with_rows(rows: Vec<E>) -> Arc<Self> {
            Arc::new(Self {
                rows: RefCell::new(rows),
                calls: Cell::new(0),
                failing: Cell::new(false),
                next_id: Cell::new(100),
                before_reply: RefCell::new(None),
            })
        }

        fn reply(&self) -> Result<(), RequestError>
        where
            E: Clone,
        {
            self.calls.set(self.calls.get() + 1);
            if let Some(hook) = self.before_reply.borrow().as_ref() {
                hook();
            }
            if self.failing.get() {
                Err(RequestError::Status(500))
            } else {
                Ok(())
            }
        }

        fn fresh_id(&self) -> EntityId {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            EntityId::from(id.to_string())
        }
    }

    #[async_trait(?Send)]
    impl CollectionApi<District> for FakeServer<District> {
        async fn list(&self) -> Result<Vec<District>, RequestError> {
            self.reply()?;
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, draft: &DistrictDto) -> Result<Vec<District>, RequestError> {
            self.reply()?;
            let id = self.fresh_id();
            self.rows.borrow_mut().push(District {
                id,
                district_name: draft.name.clone(),
            });
            Ok(self.rows.borrow().clone())
        }

        async fn update(
            &self,
            id: &EntityId,
            draft: &DistrictDto,
        ) -> Result<Vec<District>, RequestError> {
            self.reply()?;
            for d in self.rows.borrow_mut().iter_mut().filter(|d| &d.id == id) {
                d.district_name = draft.name.clone();
            }
            Ok(self.rows.borrow().clone())
        }

        async fn delete(&self, id: &EntityId) -> Result<Vec<District>, RequestError> {
            self.reply()?;
            self.rows.borrow_mut().retain(|d| &d.id != id);
            Ok(self.rows.borrow().clone())
        }
    }

    #[async_trait(?Send)]
    impl CollectionApi<Place> for FakeServer<Place> {
        async fn list(&self) -> Result<Vec<Place>, RequestError> {
            self.reply()?;
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, draft: &PlaceDto) -> Result<Vec<Place>, RequestError> {
            self.reply()?;
            let id = self.fresh_id();
            self.rows.borrow_mut().push(Place {
                id,
                place_name: draft.place_name.clone(),
                district_id: draft.district_id.clone(),
                district_name: None,
            });
            Ok(self.rows.borrow().clone())
        }

        async fn update(&self, id: &EntityId, draft: &PlaceDto) -> Result<Vec<Place>, RequestError> {
            self.reply()?;
            for p in self.rows.borrow_mut().iter_mut().filter(|p| &p.id == id) {
                p.place_name = draft.place_name.clone();
                p.district_id = draft.district_id.clone();
                p.district_name = None;
            }
            Ok(self.rows.borrow().clone())
        }

        async fn delete(&self, id: &EntityId) -> Result<Vec<Place>, RequestError> {
            self.reply()?;
            self.rows.borrow_mut().retain(|p| &p.id != id);
            Ok(self.rows.borrow().clone())
        }
    }

    fn district(id: &str, name: &str) -> District {
        District {
            id: EntityId::from(id),
            district_name: name.into(),
        }
    }

    fn place(id: &str, name: &str, district: &str) -> Place {
        Place {
            id: EntityId::from(id),
            place_name: name.into(),
            district_id: Some(EntityId::from(district)),
            district_name: None,
        }
    }

    fn district_editor(
        server: &Arc<FakeServer<District>>,
    ) -> (ListEditor<District, FakeServer<District>>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let editor = ListEditor::new(Arc::clone(server), sink.clone());
        (editor, sink)
    }

    #[test]
    fn test_create_shows_server_snapshot() {
        let server = FakeServer::with_rows(vec![]);
        let (editor, _) = district_editor(&server);

        editor.edit_draft(|d| d.name = "Kerala".into());
        block_on(editor.save());

        let items = editor.state.with_untracked(|s| s.items.to_vec());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].district_name, "Kerala");
        assert_eq!(editor.state.with_untracked(|s| s.session.clone()), EditSession::default());
    }

    #[test]
    fn test_mutation_result_is_exactly_the_returned_snapshot() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala")]);
        let (editor, _) = district_editor(&server);
        block_on(editor.load());

        // someone else changed the collection in the meantime
        server.rows.borrow_mut().insert(0, district("7", "Goa"));

        editor.edit_draft(|d| d.name = "Assam".into());
        block_on(editor.save());
        assert_eq!(
            editor.state.with_untracked(|s| s.items.to_vec()),
            server.rows.borrow().clone()
        );

        block_on(editor.delete(EntityId::from("1")));
        assert_eq!(
            editor.state.with_untracked(|s| s.items.to_vec()),
            server.rows.borrow().clone()
        );
    }

    #[test]
    fn test_empty_create_is_a_no_op() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala")]);
        let (editor, sink) = district_editor(&server);
        block_on(editor.load());
        let before = editor.state.get_untracked();
        let calls = server.calls.get();

        editor.edit_draft(|d| d.name = "   ".into());
        block_on(editor.save());

        assert_eq!(server.calls.get(), calls);
        assert_eq!(editor.state.get_untracked().items, before.items);
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_failed_mutations_leave_state_unchanged() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala"), district("2", "Goa")]);
        let (editor, sink) = district_editor(&server);
        block_on(editor.load());
        editor.start_edit(&EntityId::from("1"));
        editor.edit_draft(|d| d.name = "Keralam".into());
        let before = editor.state.get_untracked();

        server.failing.set(true);
        block_on(editor.save());
        block_on(editor.delete(EntityId::from("2")));
        block_on(editor.load());

        assert_eq!(editor.state.get_untracked(), before);
        assert_eq!(
            sink.operations(),
            vec!["districts update", "districts delete", "districts load"]
        );
    }

    #[test]
    fn test_failed_create_keeps_draft() {
        let server = FakeServer::with_rows(vec![]);
        let (editor, sink) = district_editor(&server);
        server.failing.set(true);

        editor.edit_draft(|d| d.name = "Kerala".into());
        block_on(editor.save());

        assert_eq!(editor.state.with_untracked(|s| s.session.draft().name.clone()), "Kerala");
        assert!(editor.state.with_untracked(|s| s.items.is_empty()));
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn test_start_edit_switches_rows_without_saving() {
        let server = FakeServer::with_rows(vec![place("9", "Kochi", "1"), place("10", "Thrissur", "1")]);
        let sink = Arc::new(RecordingSink::default());
        let editor: ListEditor<Place, _> = ListEditor::new(Arc::clone(&server), sink);
        block_on(editor.load());
        let calls = server.calls.get();

        editor.start_edit(&EntityId::from("9"));
        editor.edit_draft(|d| d.place_name = "Kochi (draft)".into());
        editor.start_edit(&EntityId::from("10"));

        let session = editor.state.with_untracked(|s| s.session.clone());
        assert_eq!(session.editing_id(), Some(&EntityId::from("10")));
        assert_eq!(session.draft().place_name, "Thrissur");
        assert_eq!(server.calls.get(), calls);
        assert_eq!(server.rows.borrow()[0].place_name, "Kochi");
    }

    #[test]
    fn test_update_place_returns_to_creating() {
        let server = FakeServer::with_rows(vec![place("9", "Kochi", "1")]);
        let sink = Arc::new(RecordingSink::default());
        let editor: ListEditor<Place, _> = ListEditor::new(Arc::clone(&server), sink);
        block_on(editor.load());

        editor.start_edit(&EntityId::from("9"));
        editor.edit_draft(|d| {
            d.place_name = "New Kochi".into();
            d.district_id = Some(EntityId::from("2"));
        });
        block_on(editor.save());

        let state = editor.state.get_untracked();
        assert!(!state.session.is_editing());
        let row = state.items.get(&EntityId::from("9")).cloned();
        assert_eq!(row.as_ref().map(|p| p.place_name.as_str()), Some("New Kochi"));
        assert_eq!(row.and_then(|p| p.district_id), Some(EntityId::from("2")));
    }

    #[test]
    fn test_unknown_row_cannot_be_edited() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala")]);
        let (editor, _) = district_editor(&server);
        block_on(editor.load());

        editor.start_edit(&EntityId::from("42"));
        assert!(!editor.state.with_untracked(|s| s.session.is_editing()));
    }

    #[test]
    fn test_deleting_row_under_edit_cancels_session() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala"), district("2", "Goa")]);
        let (editor, _) = district_editor(&server);
        block_on(editor.load());

        editor.start_edit(&EntityId::from("1"));
        block_on(editor.delete(EntityId::from("1")));

        let state = editor.state.get_untracked();
        assert_eq!(state.session, EditSession::default());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala")]);
        let (editor, sink) = district_editor(&server);
        let guard = editor.guard();
        *server.before_reply.borrow_mut() = Some(Box::new(move || guard.release()));

        block_on(editor.load());
        assert!(editor.state.with_untracked(|s| s.items.is_empty()));

        server.failing.set(true);
        block_on(editor.load());
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_mutation_after_unmount_changes_nothing() {
        let server = FakeServer::with_rows(vec![district("1", "Kerala"), district("2", "Goa")]);
        let (editor, sink) = district_editor(&server);
        block_on(editor.load());
        editor.start_edit(&EntityId::from("1"));
        editor.edit_draft(|d| d.name = "Keralam".into());
        let before = editor.state.get_untracked();

        let guard = editor.guard();
        *server.before_reply.borrow_mut() = Some(Box::new(move || guard.release()));
        block_on(editor.save());
        block_on(editor.delete(EntityId::from("2")));

        // both requests reached the server, neither reply was applied
        assert_eq!(server.rows.borrow().len(), 1);
        assert_eq!(server.rows.borrow()[0].district_name, "Keralam");
        assert_eq!(editor.state.get_untracked(), before);
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_place_without_district_is_created() {
        let server = FakeServer::with_rows(vec![]);
        let sink = Arc::new(RecordingSink::default());
        let editor: ListEditor<Place, _> = ListEditor::new(Arc::clone(&server), sink.clone());

        editor.edit_draft(|d| d.place_name = "Kochi".into());
        block_on(editor.save());

        assert_eq!(server.calls.get(), 1);
        let items = editor.state.with_untracked(|s| s.items.to_vec());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].district_id, None);
        assert_eq!(sink.count(), 0);
    }

    /// Creates wait until the test hands over the snapshot to return
    #[derive(Default)]
    struct GatedServer {
        gates: RefCell<VecDeque<oneshot::Receiver<Vec<District>>>>,
    }

    #[async_trait(?Send)]
    impl CollectionApi<District> for GatedServer {
        async fn list(&self) -> Result<Vec<District>, RequestError> {
            Err(RequestError::Status(405))
        }

        async fn create(&self, _: &DistrictDto) -> Result<Vec<District>, RequestError> {
            let gate = self.gates.borrow_mut().pop_front();
            match gate {
                Some(rx) => rx.await.map_err(|_| RequestError::Network("gate dropped".into())),
                None => Err(RequestError::Status(500)),
            }
        }

        async fn update(&self, _: &EntityId, _: &DistrictDto) -> Result<Vec<District>, RequestError> {
            Err(RequestError::Status(405))
        }

        async fn delete(&self, _: &EntityId) -> Result<Vec<District>, RequestError> {
            Err(RequestError::Status(405))
        }
    }

    #[test]
    fn test_last_arriving_snapshot_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let server = Arc::new(GatedServer::default());
        server.gates.borrow_mut().extend([first_rx, second_rx]);
        let sink = Arc::new(RecordingSink::default());
        let editor: ListEditor<District, _> = ListEditor::new(Arc::clone(&server), sink.clone());

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        editor.edit_draft(|d| d.name = "Kerala".into());
        let first = editor.clone();
        spawner.spawn_local(async move { first.save().await }).unwrap();
        pool.run_until_stalled();

        editor.edit_draft(|d| d.name = "Goa".into());
        let second = editor.clone();
        spawner.spawn_local(async move { second.save().await }).unwrap();
        pool.run_until_stalled();

        // replies arrive in reverse order
        second_tx.send(vec![district("1", "Kerala"), district("2", "Goa")]).unwrap();
        pool.run_until_stalled();
        assert_eq!(editor.state.with_untracked(|s| s.items.len()), 2);

        first_tx.send(vec![district("1", "Kerala")]).unwrap();
        pool.run_until_stalled();

        assert_eq!(
            editor.state.with_untracked(|s| s.items.to_vec()),
            vec![district("1", "Kerala")]
        );
        assert_eq!(sink.count(), 0);
    }
}

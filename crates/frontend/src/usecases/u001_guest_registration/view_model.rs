use super::api::RegistrationApi;
use super::model::{read_attachment, Attachment, GuestFields, RegistrationDraft};
use crate::shared::api_error::RequestError;
use crate::shared::cascade::{CascadingSelector, ChildSource};
use crate::shared::entity_editor::CollectionApi;
use crate::shared::lifecycle::MountGuard;
use crate::shared::reporting::{FailureSink, Notifier};
use contracts::domain::a001_district::aggregate::District;
use contracts::domain::a002_place::aggregate::Place;
use leptos::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const REGISTERED_MESSAGE: &str = "User registered";

/// ViewModel for the guest registration form.
///
/// District and place live in the cascade so a chosen place always belongs
/// to the chosen district. Success is announced to the user; failure only
/// goes to the failure sink. The form is never cleared automatically.
pub struct RegistrationViewModel<D, P, R> {
    pub fields: RwSignal<GuestFields>,
    pub districts: RwSignal<Vec<District>>,
    pub cascade: CascadingSelector<Place, P>,
    district_api: Arc<D>,
    registration_api: Arc<R>,
    sink: Arc<dyn FailureSink>,
    notifier: Arc<dyn Notifier>,
    guard: MountGuard,
    photo_pick: Arc<AtomicU64>,
}

impl<D, P, R> Clone for RegistrationViewModel<D, P, R> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields,
            districts: self.districts,
            cascade: self.cascade.clone(),
            district_api: Arc::clone(&self.district_api),
            registration_api: Arc::clone(&self.registration_api),
            sink: Arc::clone(&self.sink),
            notifier: Arc::clone(&self.notifier),
            guard: self.guard.clone(),
            photo_pick: Arc::clone(&self.photo_pick),
        }
    }
}

impl<D, P, R> RegistrationViewModel<D, P, R>
where
    D: CollectionApi<District> + 'static,
    P: ChildSource<Place> + 'static,
    R: RegistrationApi + 'static,
{
    pub fn new(
        district_api: Arc<D>,
        place_source: Arc<P>,
        registration_api: Arc<R>,
        sink: Arc<dyn FailureSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let guard = MountGuard::new();
        Self {
            fields: RwSignal::new(GuestFields::default()),
            districts: RwSignal::new(Vec::new()),
            cascade: CascadingSelector::new(place_source, Arc::clone(&sink), guard.clone()),
            district_api,
            registration_api,
            sink,
            notifier,
            guard,
            photo_pick: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn guard(&self) -> MountGuard {
        self.guard.clone()
    }

    /// Current draft, assembled from the fields and the cascade
    pub fn draft(&self) -> RegistrationDraft {
        let cascade = self.cascade.state.get_untracked();
        RegistrationDraft::new(
            self.fields.get_untracked(),
            cascade.parent().cloned(),
            cascade.child().cloned(),
        )
    }

    pub async fn load_districts(&self) {
        let result = self.district_api.list().await;
        if !self.guard.is_mounted() {
            return;
        }
        match result {
            Ok(v) => {
                self.districts.try_set(v);
            }
            Err(e) => self.sink.report("districts load", &e),
        }
    }

    pub fn set_photo(&self, photo: Option<Attachment>) {
        self.fields.update(|f| f.photo = photo);
    }

    pub async fn submit(&self) {
        let payload = self.draft().to_multipart();
        let result = self.registration_api.register(&payload).await;
        if !self.guard.is_mounted() {
            return;
        }
        match result {
            Ok(()) => self.notifier.notify(REGISTERED_MESSAGE),
            Err(e) => self.sink.report("register", &e),
        }
    }

    pub fn load_districts_command(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.load_districts().await });
    }

    pub fn submit_command(&self) {
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move { this.submit().await });
    }

    pub fn pick_photo_command(&self, file: Option<web_sys::File>) {
        let ticket = self.begin_photo_pick();
        let Some(file) = file else {
            self.set_photo(None);
            return;
        };
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = read_attachment(file).await;
            this.finish_photo_pick(ticket, result);
        });
    }

    /// Every pick (or clear) supersedes reads still in flight
    fn begin_photo_pick(&self) -> u64 {
        self.photo_pick.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn finish_photo_pick(&self, ticket: u64, result: Result<Attachment, RequestError>) {
        if !self.guard.is_mounted() || self.photo_pick.load(Ordering::SeqCst) != ticket {
            log::debug!("photo read {} superseded", ticket);
            return;
        }
        match result {
            Ok(photo) => self.set_photo(Some(photo)),
            Err(e) => self.sink.report("photo read", &e),
        }
    }
}

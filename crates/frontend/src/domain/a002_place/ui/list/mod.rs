use crate::domain::a001_district::api::HttpDistrictApi;
use crate::domain::a002_place::api::HttpPlaceApi;
use crate::shared::entity_editor::{CollectionApi, ListEditor};
use crate::shared::icons::icon;
use crate::shared::reporting::{FailureSink, LogSink};
use contracts::domain::a001_district::aggregate::District;
use contracts::domain::a002_place::aggregate::Place;
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
#[allow(non_snake_case)]
pub fn PlaceList() -> impl IntoView {
    let sink: Arc<dyn FailureSink> = Arc::new(LogSink);
    let editor: ListEditor<Place, HttpPlaceApi> =
        ListEditor::new(Arc::new(HttpPlaceApi), Arc::clone(&sink));
    let (districts, set_districts) = signal::<Vec<District>>(Vec::new());

    let guard = editor.guard();
    {
        let guard = guard.clone();
        on_cleanup(move || guard.release());
    }

    // District options for the form selector
    wasm_bindgen_futures::spawn_local(async move {
        let result = HttpDistrictApi.list().await;
        if !guard.is_mounted() {
            return;
        }
        match result {
            Ok(v) => {
                set_districts.try_set(v);
            }
            Err(e) => sink.report("districts load", &e),
        }
    });
    editor.load_command();

    let is_editing = Signal::derive({
        let editor = editor.clone();
        move || editor.is_editing()
    });
    let selected_district = Signal::derive({
        let editor = editor.clone();
        move || editor.draft().district_id
    });
    let form_editor = editor.clone();
    let cancel_editor = editor.clone();
    let rows_editor = editor.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || if is_editing.get() { "Edit place" } else { "Add new place" }}
                    </h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click={
                        let editor = editor.clone();
                        move |_| editor.load_command()
                    }>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"District"}</th>
                            <th class="table__header-cell">{"Place"}</th>
                            <th class="table__header-cell">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr class="table__row table__row--form">
                            <td class="table__cell">
                                <select
                                    // re-applied once the options arrive
                                    prop:value=move || {
                                        districts.track();
                                        selected_district.get().map(|id| id.as_string()).unwrap_or_default()
                                    }
                                    on:change={
                                        let editor = form_editor.clone();
                                        move |ev| {
                                            let value = EntityId::from_selection(&event_target_value(&ev));
                                            editor.edit_draft(|d| d.district_id = value);
                                        }
                                    }
                                >
                                    <option value="">{"-- select --"}</option>
                                    {move || districts.get().into_iter().map(|d| {
                                        let id = d.id.clone();
                                        view! {
                                            <option
                                                value=d.id.as_string()
                                                selected=move || selected_district.get().as_ref() == Some(&id)
                                            >
                                                {d.display_name().to_string()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </td>
                            <td class="table__cell">
                                <input
                                    type="text"
                                    placeholder="Enter place"
                                    prop:value={
                                        let editor = form_editor.clone();
                                        move || editor.draft().place_name
                                    }
                                    on:input={
                                        let editor = form_editor.clone();
                                        move |ev| {
                                            let value = event_target_value(&ev);
                                            editor.edit_draft(|d| d.place_name = value);
                                        }
                                    }
                                />
                            </td>
                            <td class="table__cell">
                                <button class="button button--primary" on:click={
                                    let editor = form_editor.clone();
                                    move |_| editor.save_command()
                                }>
                                    {icon("save")}
                                    {move || if is_editing.get() { "Update" } else { "Save" }}
                                </button>
                                <Show when=move || is_editing.get()>
                                    <button class="button button--secondary" on:click={
                                        let editor = cancel_editor.clone();
                                        move |_| editor.cancel_edit()
                                    }>
                                        {icon("cancel")}
                                        {"Cancel"}
                                    </button>
                                </Show>
                            </td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <h3>{"Existing places"}</h3>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Place"}</th>
                            <th class="table__header-cell">{"District"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows_editor.items().into_iter().map(|p| {
                            let edit_id = p.id.clone();
                            let delete_id = p.id.clone();
                            let district = p.district_label();
                            let on_edit = rows_editor.clone();
                            let on_delete = rows_editor.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{p.place_name}</td>
                                    <td class="table__cell">{district}</td>
                                    <td class="table__cell">
                                        <button class="button button--secondary" on:click=move |_| on_edit.start_edit(&edit_id)>
                                            {icon("edit")}
                                            {"Edit"}
                                        </button>
                                        <button class="button button--secondary" on:click=move |_| on_delete.delete_command(delete_id.clone())>
                                            {icon("delete")}
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

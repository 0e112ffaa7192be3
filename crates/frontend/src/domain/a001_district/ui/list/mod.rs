use crate::domain::a001_district::api::HttpDistrictApi;
use crate::shared::entity_editor::ListEditor;
use crate::shared::icons::icon;
use crate::shared::reporting::LogSink;
use contracts::domain::a001_district::aggregate::District;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
#[allow(non_snake_case)]
pub fn DistrictList() -> impl IntoView {
    let editor: ListEditor<District, HttpDistrictApi> =
        ListEditor::new(Arc::new(HttpDistrictApi), Arc::new(LogSink));

    let guard = editor.guard();
    on_cleanup(move || guard.release());

    editor.load_command();

    let is_editing = Signal::derive({
        let editor = editor.clone();
        move || editor.is_editing()
    });
    let form_editor = editor.clone();
    let cancel_editor = editor.clone();
    let rows_editor = editor.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Districts"}</h1>
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
                            <th class="table__header-cell">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr class="table__row table__row--form">
                            <td class="table__cell">
                                <input
                                    type="text"
                                    prop:placeholder=move || if is_editing.get() { "Edit district" } else { "Enter district" }
                                    prop:value={
                                        let editor = form_editor.clone();
                                        move || editor.draft().name
                                    }
                                    on:input={
                                        let editor = form_editor.clone();
                                        move |ev| {
                                            let value = event_target_value(&ev);
                                            editor.edit_draft(|d| d.name = value);
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
                    <tbody>
                        {move || rows_editor.items().into_iter().map(|d| {
                            let edit_id = d.id.clone();
                            let delete_id = d.id.clone();
                            let on_edit = rows_editor.clone();
                            let on_delete = rows_editor.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{d.district_name}</td>
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

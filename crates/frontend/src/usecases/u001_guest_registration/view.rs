use super::api::HttpRegistrationApi;
use super::view_model::RegistrationViewModel;
use crate::domain::a001_district::api::HttpDistrictApi;
use crate::domain::a002_place::api::HttpPlaceApi;
use crate::shared::icons::icon;
use crate::shared::reporting::{AlertNotifier, LogSink};
use contracts::domain::common::{Entity, EntityId};
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::HtmlInputElement;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let vm = RegistrationViewModel::new(
        Arc::new(HttpDistrictApi),
        Arc::new(HttpPlaceApi),
        Arc::new(HttpRegistrationApi),
        Arc::new(LogSink),
        Arc::new(AlertNotifier),
    );

    let guard = vm.guard();
    on_cleanup(move || guard.release());

    vm.load_districts_command();

    let fields = vm.fields;
    let districts = vm.districts;
    let cascade = vm.cascade.state;

    view! {
        <div class="details-container registration">
            <div class="details-header">
                <h3>{"Registration"}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="full_name">{"Full Name"}</label>
                    <input
                        type="text"
                        id="full_name"
                        prop:value=move || fields.get().full_name
                        on:input=move |ev| fields.update(|f| f.full_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || fields.get().email
                        on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || fields.get().password
                        on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="photo">{"Photo"}</label>
                    <input
                        type="file"
                        id="photo"
                        accept="image/*"
                        on:change={
                            let vm = vm.clone();
                            move |ev| {
                                let input: HtmlInputElement = event_target(&ev);
                                vm.pick_photo_command(input.files().and_then(|files| files.get(0)));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="district">{"District"}</label>
                    <select
                        id="district"
                        prop:value=move || {
                            districts.track();
                            cascade.with(|s| s.parent().map(EntityId::as_string).unwrap_or_default())
                        }
                        on:change={
                            let vm = vm.clone();
                            move |ev| vm.cascade.select_parent_command(EntityId::from_selection(&event_target_value(&ev)))
                        }
                    >
                        <option value="">{"-- select --"}</option>
                        {move || districts.get().into_iter().map(|d| {
                            let id = d.id.clone();
                            view! {
                                <option
                                    value=d.id.as_string()
                                    selected=move || cascade.with(|s| s.parent() == Some(&id))
                                >
                                    {d.display_name().to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="place">{"Place"}</label>
                    <select
                        id="place"
                        disabled=move || !cascade.with(|s| s.is_child_enabled())
                        prop:value=move || cascade.with(|s| s.child().map(EntityId::as_string).unwrap_or_default())
                        on:change={
                            let vm = vm.clone();
                            move |ev| vm.cascade.select_child(EntityId::from_selection(&event_target_value(&ev)))
                        }
                    >
                        <option value="">{"-- select --"}</option>
                        {move || cascade.with(|s| s.options().to_vec()).into_iter().map(|p| view! {
                            <option value=p.id.as_string()>{p.display_name().to_string()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.submit_command()
                    }
                >
                    {icon("save")}
                    {"Register"}
                </button>
            </div>
        </div>
    }
}

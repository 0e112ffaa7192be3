use crate::domain::a001_district::ui::list::DistrictList;
use crate::domain::a002_place::ui::list::PlaceList;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::usecases::u001_guest_registration::RegistrationPage;
use leptos::prelude::*;

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Districts => view! { <DistrictList /> }.into_any(),
        Page::Places => view! { <PlaceList /> }.into_any(),
        Page::Registration => view! { <RegistrationPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            // Switching pages unmounts the previous one and releases its guards
            view! { <div class="page-host">{move || page_view(ctx.active.get())}</div> }.into_any()
        } />
    }
}

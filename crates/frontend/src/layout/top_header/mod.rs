//! TopHeader component - application top navigation bar.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"District Registry"</span>
            </div>

            <nav class="top-header__actions">
                {Page::ALL.into_iter().map(|page| view! {
                    <button
                        class="top-header__nav-btn"
                        class:top-header__nav-btn--active=move || ctx.active.get() == page
                        on:click=move |_| ctx.open(page)
                    >
                        {icon(page.key())}
                        <span>{page.title()}</span>
                    </button>
                }).collect_view()}
            </nav>
        </div>
    }
}

//! Top Bar Component
//!
//! Sidebar toggle, search box, item count and the add button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::summary;
use crate::state::Action;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="top-bar">
            <button
                class="menu-btn"
                title="Groups"
                on:click=move |_| {
                    ctx.dispatch(Action::ToggleSidebar);
                }
            >
                "☰"
            </button>

            <h1 class="app-title">"My Collection"</h1>

            <input
                type="search"
                class="search-input"
                placeholder="Search by name or group..."
                prop:value=move || ctx.store.read().filter.search.clone()
                on:input=move |ev| {
                    ctx.dispatch(Action::SearchChanged(event_target_value(&ev)));
                }
            />

            <span class="item-count">{move || summary(&ctx.store.read())}</span>

            <button
                id="add-btn"
                class="add-btn"
                on:click=move |_| {
                    ctx.dispatch(Action::OpenAddDialog);
                }
            >
                "+ Add Item"
            </button>
        </header>
    }
}

//! Group Sidebar Component
//!
//! Slide-out list of groups. Entries are rebuilt from the store on every
//! change, so opening it always shows the current groups.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::groups::group_entries;
use crate::state::Action;

#[component]
pub fn GroupSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_open = move || ctx.store.read().sidebar.open;
    let entries = move || {
        let state = ctx.store.read();
        group_entries(&state.items, state.filter.active_group.as_deref())
    };
    let close = move |_: web_sys::MouseEvent| {
        ctx.dispatch(Action::CloseSidebar);
    };

    view! {
        <div class="sidebar-overlay" class:active=is_open on:click=close />
        <aside class="sidebar" class:open=is_open>
            <div class="sidebar-header">
                <h3>"Groups"</h3>
                <button class="close-sidebar-btn" on:click=close>"×"</button>
            </div>

            <ul class="group-list">
                <For
                    each=entries
                    key=|entry| (entry.group.clone(), entry.count, entry.active)
                    children=move |entry| {
                        let group = entry.group.clone();
                        view! {
                            <li
                                class="group-item"
                                class:active=entry.active
                                on:click=move |_| {
                                    ctx.dispatch(Action::GroupSelected(group.clone()));
                                }
                            >
                                <span class="group-name">{entry.label}</span>
                                <span class="group-count">{entry.count}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </aside>
    }
}

//! Collection Tracker App
//!
//! Main application component: group sidebar, top bar, item grid and the
//! two dialogs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemModal, GroupSidebar, ItemGrid, TopBar, ViewItemModal};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::state::AppState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        ctx.load_items();
    });

    view! {
        <div class="app-layout">
            <GroupSidebar />

            <main class="main-content">
                <TopBar />
                <ItemGrid />
            </main>

            <AddItemModal />
            <ViewItemModal />
        </div>
    }
}

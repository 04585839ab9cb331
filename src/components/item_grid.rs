//! Item Grid Component
//!
//! Card grid for the visible items, or a placeholder when there is nothing
//! to show.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::render::{grid_view, GridView, ItemCard};
use crate::state::Action;

/// One catalog card; click opens the detail view
#[component]
fn ItemCardView(card: ItemCard) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = card.id;
    let alt = card.name.clone();

    view! {
        <div
            class="item-card"
            class:deleting=card.deleting
            on:click=move |_| {
                ctx.dispatch(Action::OpenItem(id));
            }
        >
            <DeleteConfirmButton
                button_class="delete-btn"
                disabled=card.deleting
                on_confirm=Callback::new(move |_| ctx.delete_item(id))
            />
            <img src=card.image_src alt=alt class="card-image" />
            <div class="card-content">
                <div class="card-header">
                    <h3 class="card-title">{card.name}</h3>
                    <span class="card-price">{card.price}</span>
                </div>
                <p class="card-desc">{card.description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config();

    let grid = Memo::new(move |_| grid_view(&ctx.store.read(), &config));

    let cards = move || match grid.get() {
        GridView::Cards(cards) => cards,
        _ => Vec::new(),
    };
    let is_loading = move || grid.with(|g| matches!(g, GridView::Loading));
    let is_failed = move || grid.with(|g| matches!(g, GridView::Failed));

    view! {
        <div class="items-grid">
            <Show when=is_loading>
                <div class="grid-message loading">"Loading..."</div>
            </Show>

            {move || grid.with(|g| g.message()).map(|text| view! {
                <div class="grid-message" class:error=is_failed>
                    <span class="grid-message-icon">"📦"</span>
                    <p>{text}</p>
                </div>
            })}

            <For
                each=cards
                key=|card| (card.id, card.deleting)
                children=move |card| view! { <ItemCardView card=card /> }
            />
        </div>
    }
}

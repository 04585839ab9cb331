//! View Item Modal Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::item_detail;
use crate::state::Action;

#[component]
pub fn ViewItemModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config();

    let detail = Memo::new(move |_| item_detail(&ctx.store.read(), &config));
    let close = move |_: web_sys::MouseEvent| {
        ctx.dispatch(Action::CloseItem);
    };

    view! {
        <div class="modal" class:active=move || ctx.store.read().view_dialog.state().is_open() on:click=close>
            <div class="modal-content view-content" on:click=|ev| ev.stop_propagation()>
                <button class="close-btn" on:click=close>"×"</button>
                {move || detail.get().map(|detail| {
                    let alt = detail.name.clone();
                    view! {
                        <img src=detail.image_src alt=alt class="view-image" />
                        <div class="view-body">
                            <div class="card-header">
                                <h2>{detail.name}</h2>
                                <span class="card-price">{detail.price}</span>
                            </div>
                            <span class="view-group">{detail.group}</span>
                            <p class="view-description">{detail.description}</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

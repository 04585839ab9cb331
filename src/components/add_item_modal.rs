//! Add Item Modal Component
//!
//! Form for creating new items: name, price, description, group and an
//! optional image.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::DraftField;
use crate::state::Action;

#[component]
pub fn AddItemModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let is_open = move || ctx.store.read().add_dialog.state.is_open();
    let is_submitting = move || ctx.store.read().add_dialog.is_submitting();
    let close = move |_: web_sys::MouseEvent| {
        ctx.dispatch(Action::CloseAddDialog);
    };
    let edit = move |field: DraftField, value: String| {
        ctx.dispatch(Action::EditDraft(field, value));
    };

    // Clear the native file input once the draft drops its image
    Effect::new(move |_| {
        if ctx.store.read().draft().image_name.is_none() {
            if let Some(input) = file_input.get_untracked() {
                input.set_value("");
            }
        }
    });

    let selected_file = move || {
        file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    };

    let on_file_change = move |_| {
        let name = selected_file().map(|file| file.name());
        ctx.dispatch(Action::ImageChosen(name));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_item(selected_file());
    };

    view! {
        <div class="modal" class:active=is_open on:click=close>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>"Add New Item"</h2>
                    <button class="close-btn" on:click=close>"×"</button>
                </div>

                <form class="add-item-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            required
                            placeholder="e.g. Vintage Card"
                            prop:value=move || ctx.store.read().draft().name.clone()
                            on:input=move |ev| edit(DraftField::Name, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="price">"Price ($)"</label>
                        <input
                            type="number"
                            id="price"
                            required
                            min="0"
                            step="0.01"
                            placeholder="0.00"
                            prop:value=move || ctx.store.read().draft().price.clone()
                            on:input=move |ev| edit(DraftField::Price, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="group">"Group"</label>
                        <input
                            type="text"
                            id="group"
                            placeholder="General"
                            prop:value=move || ctx.store.read().draft().group.clone()
                            on:input=move |ev| edit(DraftField::Group, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            rows="3"
                            placeholder="Condition, origin, notes..."
                            prop:value=move || ctx.store.read().draft().description.clone()
                            on:input=move |ev| edit(DraftField::Description, event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label class="file-custom-label">
                            <input
                                type="file"
                                id="image"
                                accept="image/*"
                                node_ref=file_input
                                on:change=on_file_change
                            />
                            <span>{move || ctx.store.read().add_dialog.file_label().to_string()}</span>
                        </label>
                    </div>

                    <button type="submit" class="btn-submit" disabled=is_submitting>
                        {move || ctx.store.read().add_dialog.submit_label()}
                    </button>
                </form>
            </div>
        </div>
    }
}

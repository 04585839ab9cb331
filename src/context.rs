//! Application Context
//!
//! Shared handles provided via Leptos Context API, plus the command handlers
//! that talk to the backend and feed results back into the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::ClientConfig;
use crate::models::ItemId;
use crate::state::{Action, Render};
use crate::store::{dispatch, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ClientConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Apply an action, raising a blocking alert when it asks for one.
    pub fn dispatch(&self, action: Action) -> Render {
        let render = dispatch(&self.store, action);
        if let Render::Alert(message) = &render {
            log::warn!("alert: {}", message);
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        render
    }

    /// Fetch the full list and replace the store with it.
    pub fn load_items(&self) {
        let ctx = *self;
        ctx.dispatch(Action::LoadStarted);
        spawn_local(async move {
            let config = ctx.config();
            log::info!("Loading items from {}", config.items_url());
            match commands::list_items(&config).await {
                Ok(items) => {
                    log::info!("Loaded {} items", items.len());
                    ctx.dispatch(Action::ItemsLoaded(items));
                }
                Err(e) => {
                    log::error!("Error loading items: {}", e);
                    ctx.dispatch(Action::LoadFailed(e));
                }
            }
        });
    }

    /// Validate the add form, upload it, and append the created item.
    pub fn submit_item(&self, file: Option<web_sys::File>) {
        let ctx = *self;
        let draft = ctx.store.read_untracked().draft().clone();
        if let Err(e) = draft.to_request(None) {
            ctx.dispatch(Action::DraftRejected(e));
            return;
        }
        if ctx.dispatch(Action::SubmitStarted) == Render::Unchanged {
            return;
        }

        spawn_local(async move {
            let image = match file {
                Some(file) => match commands::read_image(&file).await {
                    Ok(upload) => Some(upload),
                    Err(e) => {
                        log::error!("{}", e);
                        ctx.dispatch(Action::CreateFailed(commands::ApiError::Transport(e)));
                        return;
                    }
                },
                None => None,
            };
            let request = match draft.to_request(image) {
                Ok(request) => request,
                Err(e) => {
                    ctx.dispatch(Action::DraftRejected(e));
                    return;
                }
            };

            log::info!("Creating item {:?}", request.name);
            match commands::create_item(&ctx.config(), &request).await {
                Ok(item) => {
                    log::info!("Created item #{}", item.id);
                    ctx.dispatch(Action::ItemCreated(item));
                }
                Err(e) => {
                    log::error!("Error creating item: {}", e);
                    ctx.dispatch(Action::CreateFailed(e));
                }
            }
        });
    }

    /// Delete on the server, then drop the item from the store.
    pub fn delete_item(&self, id: ItemId) {
        let ctx = *self;
        if ctx.dispatch(Action::DeleteStarted(id)) == Render::Unchanged {
            return;
        }
        spawn_local(async move {
            match commands::delete_item(&ctx.config(), id).await {
                Ok(()) => {
                    log::info!("Deleted item #{}", id);
                    ctx.dispatch(Action::ItemDeleted(id));
                }
                Err(e) => {
                    log::error!("Error deleting item #{}: {}", id, e);
                    ctx.dispatch(Action::DeleteFailed(id, e));
                }
            }
        });
    }
}

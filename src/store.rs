//! Global Application State Store
//!
//! Wraps `AppState` in a Leptos reactive store. All mutation goes through
//! `dispatch`, so views only ever see states produced by `AppState::apply`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::{Action, AppState, Render};

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Apply an action to the store and report what it changed.
pub fn dispatch(store: &AppStore, action: Action) -> Render {
    log::debug!("dispatch {}", action_name(&action));
    let mut state = store.write();
    state.apply(action)
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::LoadStarted => "LoadStarted",
        Action::ItemsLoaded(_) => "ItemsLoaded",
        Action::LoadFailed(_) => "LoadFailed",
        Action::SearchChanged(_) => "SearchChanged",
        Action::GroupSelected(_) => "GroupSelected",
        Action::ToggleSidebar => "ToggleSidebar",
        Action::CloseSidebar => "CloseSidebar",
        Action::OpenAddDialog => "OpenAddDialog",
        Action::CloseAddDialog => "CloseAddDialog",
        Action::EditDraft(..) => "EditDraft",
        Action::ImageChosen(_) => "ImageChosen",
        Action::DraftRejected(_) => "DraftRejected",
        Action::SubmitStarted => "SubmitStarted",
        Action::ItemCreated(_) => "ItemCreated",
        Action::CreateFailed(_) => "CreateFailed",
        Action::OpenItem(_) => "OpenItem",
        Action::CloseItem => "CloseItem",
        Action::DeleteStarted(_) => "DeleteStarted",
        Action::ItemDeleted(_) => "ItemDeleted",
        Action::DeleteFailed(..) => "DeleteFailed",
    }
}

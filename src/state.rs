//! Application State
//!
//! Everything the UI shows lives in `AppState`. Event handlers never touch
//! it directly: they dispatch an `Action`, which mutates the state and tells
//! the caller what needs redrawing (or which alert to raise).

use std::collections::BTreeSet;

use crate::commands::ApiError;
use crate::filter::ItemFilter;
use crate::groups::SidebarState;
use crate::item_store::ItemStore;
use crate::modal::{AddItemDialog, ModalState, SubmitState, ViewItemDialog};
use crate::models::{DraftError, DraftField, Item, ItemDraft, ItemId};

pub const CREATE_REJECTED_ALERT: &str = "Failed to add item";
pub const CREATE_ERROR_ALERT: &str = "An error occurred";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete item";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub items: ItemStore,
    pub load: LoadState,
    pub filter: ItemFilter,
    pub sidebar: SidebarState,
    pub add_dialog: AddItemDialog,
    pub view_dialog: ViewItemDialog,
    /// Items with a delete request in flight
    pub deleting: BTreeSet<ItemId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    ItemsLoaded(Vec<Item>),
    LoadFailed(ApiError),

    SearchChanged(String),
    GroupSelected(Option<String>),
    ToggleSidebar,
    CloseSidebar,

    OpenAddDialog,
    CloseAddDialog,
    EditDraft(DraftField, String),
    ImageChosen(Option<String>),
    DraftRejected(DraftError),
    SubmitStarted,
    ItemCreated(Item),
    CreateFailed(ApiError),

    OpenItem(ItemId),
    CloseItem,

    DeleteStarted(ItemId),
    ItemDeleted(ItemId),
    DeleteFailed(ItemId, ApiError),
}

/// What an applied action asks of the UI
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// Action was refused; the caller must not go on (e.g. start a request)
    Unchanged,
    Grid,
    Sidebar,
    Dialog,
    Alert(String),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action) -> Render {
        match action {
            Action::LoadStarted => {
                self.load = LoadState::Loading;
                Render::Grid
            }
            Action::ItemsLoaded(items) => {
                self.items.replace(items);
                self.load = LoadState::Loaded;
                self.filter = ItemFilter::default();
                Render::Grid
            }
            Action::LoadFailed(err) => {
                self.items.clear();
                self.load = LoadState::Failed(err.to_string());
                Render::Grid
            }

            Action::SearchChanged(search) => {
                self.filter.search = search;
                Render::Grid
            }
            Action::GroupSelected(group) => {
                self.filter.active_group = group;
                Render::Grid
            }
            Action::ToggleSidebar => {
                self.sidebar.open = !self.sidebar.open;
                Render::Sidebar
            }
            Action::CloseSidebar => {
                self.sidebar.open = false;
                Render::Sidebar
            }

            Action::OpenAddDialog => {
                self.add_dialog.state = ModalState::Open;
                Render::Dialog
            }
            Action::CloseAddDialog => {
                self.add_dialog.state = ModalState::Closed;
                Render::Dialog
            }
            Action::EditDraft(field, value) => {
                self.add_dialog.draft.set(field, value);
                Render::Dialog
            }
            Action::ImageChosen(name) => {
                self.add_dialog.draft.image_name = name;
                Render::Dialog
            }
            Action::DraftRejected(err) => {
                self.add_dialog.submit = SubmitState::Idle;
                Render::Alert(err.to_string())
            }
            Action::SubmitStarted => {
                if self.add_dialog.is_submitting() {
                    return Render::Unchanged;
                }
                self.add_dialog.submit = SubmitState::Submitting;
                Render::Dialog
            }
            Action::ItemCreated(item) => {
                self.items.add(item);
                self.add_dialog = AddItemDialog::default();
                Render::Grid
            }
            Action::CreateFailed(err) => {
                self.add_dialog.submit = SubmitState::Idle;
                let message = if err.is_rejection() {
                    CREATE_REJECTED_ALERT
                } else {
                    CREATE_ERROR_ALERT
                };
                Render::Alert(message.to_string())
            }

            Action::OpenItem(id) => {
                if !self.items.contains(id) {
                    return Render::Unchanged;
                }
                self.view_dialog.item = Some(id);
                Render::Dialog
            }
            Action::CloseItem => {
                self.view_dialog.item = None;
                Render::Dialog
            }

            Action::DeleteStarted(id) => {
                if !self.items.contains(id) || !self.deleting.insert(id) {
                    return Render::Unchanged;
                }
                Render::Grid
            }
            Action::ItemDeleted(id) => {
                self.deleting.remove(&id);
                self.items.remove(id);
                if self.view_dialog.item == Some(id) {
                    self.view_dialog.item = None;
                }
                Render::Grid
            }
            Action::DeleteFailed(id, _) => {
                self.deleting.remove(&id);
                Render::Alert(DELETE_FAILED_ALERT.to_string())
            }
        }
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.add_dialog.draft
    }

    pub fn is_deleting(&self, id: ItemId) -> bool {
        self.deleting.contains(&id)
    }

    /// Items passing the current filter, in store order
    pub fn visible_items(&self) -> Vec<&Item> {
        self.filter.apply(self.items.items())
    }
}

//! Modal Controllers
//!
//! Open/closed state of the add-item and view-item dialogs, kept apart from
//! the item data.

use crate::models::{ItemDraft, ItemId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == ModalState::Open
    }
}

/// Add flow: `Idle -> Submitting -> Idle`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

pub const SUBMIT_LABEL: &str = "Add Item";
pub const SUBMITTING_LABEL: &str = "Adding...";
pub const NO_FILE_LABEL: &str = "Choose an image...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddItemDialog {
    pub state: ModalState,
    pub submit: SubmitState,
    pub draft: ItemDraft,
}

impl AddItemDialog {
    pub fn is_submitting(&self) -> bool {
        self.submit == SubmitState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.submit {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::Submitting => SUBMITTING_LABEL,
        }
    }

    pub fn file_label(&self) -> &str {
        self.draft.image_name.as_deref().unwrap_or(NO_FILE_LABEL)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewItemDialog {
    /// Item shown in the detail view
    pub item: Option<ItemId>,
}

impl ViewItemDialog {
    pub fn state(&self) -> ModalState {
        if self.item.is_some() {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }
}

//! UI Components
//!
//! Leptos components for the catalog page.

mod top_bar;
mod group_sidebar;
mod item_grid;
mod add_item_modal;
mod view_item_modal;
mod delete_confirm_button;

pub use top_bar::TopBar;
pub use group_sidebar::GroupSidebar;
pub use item_grid::ItemGrid;
pub use add_item_modal::AddItemModal;
pub use view_item_modal::ViewItemModal;
pub use delete_confirm_button::DeleteConfirmButton;

//! Renderer
//!
//! Turns `AppState` into plain view models. Components only map these onto
//! markup, so everything shown in the grid and detail view is testable here.

use crate::config::ClientConfig;
use crate::models::{Item, ItemId};
use crate::state::{AppState, LoadState};

pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
pub const NO_DESCRIPTION: &str = "No description provided.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load items.";
pub const EMPTY_COLLECTION_MESSAGE: &str = "No items in your collection yet.";
pub const NO_MATCHES_MESSAGE: &str = "No items match your filter.";

/// One grid card
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_src: String,
    pub deleting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loading,
    Failed,
    /// Store is empty
    Empty,
    /// Store has items but the filter hides all of them
    NoMatches,
    Cards(Vec<ItemCard>),
}

impl GridView {
    /// Placeholder text for the non-card states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GridView::Loading | GridView::Cards(_) => None,
            GridView::Failed => Some(LOAD_FAILED_MESSAGE),
            GridView::Empty => Some(EMPTY_COLLECTION_MESSAGE),
            GridView::NoMatches => Some(NO_MATCHES_MESSAGE),
        }
    }
}

/// Detail dialog contents
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetail {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub group: String,
    pub description: String,
    pub image_src: String,
}

/// `$5.00`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// First `max_chars` characters plus `...` when longer.
pub fn truncate_description(description: &str, max_chars: usize) -> String {
    match description.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

fn card(item: &Item, state: &AppState, config: &ClientConfig) -> ItemCard {
    ItemCard {
        id: item.id,
        name: item.name.clone(),
        price: format_price(item.price),
        description: item
            .description()
            .map(|d| truncate_description(d, DESCRIPTION_PREVIEW_CHARS))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        image_src: config.image_src(item.image_filename.as_deref()),
        deleting: state.is_deleting(item.id),
    }
}

pub fn grid_view(state: &AppState, config: &ClientConfig) -> GridView {
    match state.load {
        LoadState::Loading if state.items.is_empty() => return GridView::Loading,
        LoadState::Failed(_) => return GridView::Failed,
        _ => {}
    }
    if state.items.is_empty() {
        return GridView::Empty;
    }

    let cards: Vec<ItemCard> = state
        .visible_items()
        .into_iter()
        .map(|item| card(item, state, config))
        .collect();
    if cards.is_empty() {
        GridView::NoMatches
    } else {
        GridView::Cards(cards)
    }
}

pub fn item_detail(state: &AppState, config: &ClientConfig) -> Option<ItemDetail> {
    let item = state.items.get(state.view_dialog.item?)?;
    Some(ItemDetail {
        id: item.id,
        name: item.name.clone(),
        price: format_price(item.price),
        group: item.effective_group().to_string(),
        description: item.description().unwrap_or(NO_DESCRIPTION).to_string(),
        image_src: config.image_src(item.image_filename.as_deref()),
    })
}

/// Header line, e.g. `3 items` or `1 of 3 items in Sports`
pub fn summary(state: &AppState) -> String {
    let total = state.items.len();
    let noun = if total == 1 { "item" } else { "items" };
    if !state.filter.is_active() {
        return format!("{} {}", total, noun);
    }
    let shown = state.visible_items().len();
    match &state.filter.active_group {
        Some(group) => format!("{} of {} {} in {}", shown, total, noun, group),
        None => format!("{} of {} {}", shown, total, noun),
    }
}

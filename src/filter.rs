//! Filter Engine
//!
//! Derives the visible subset of the item store from the search box and the
//! active sidebar group. Never mutates the store.

use crate::models::Item;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub search: String,
    /// `None` shows every group
    pub active_group: Option<String>,
}

impl ItemFilter {
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.active_group.is_some()
    }

    /// Name or effective group contains the search term (case-insensitive),
    /// and the effective group equals the active group when one is set.
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_search(item) && self.matches_group(item)
    }

    fn matches_search(&self, item: &Item) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        item.name.to_lowercase().contains(&term)
            || item.effective_group().to_lowercase().contains(&term)
    }

    fn matches_group(&self, item: &Item) -> bool {
        match &self.active_group {
            Some(group) => item.effective_group() == group,
            None => true,
        }
    }

    /// Matching items in store order
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

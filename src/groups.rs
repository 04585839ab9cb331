//! Group Navigator
//!
//! Sidebar entries derived from the item store on every render, so the list
//! always reflects the latest items.

use crate::item_store::ItemStore;

pub const ALL_ITEMS_LABEL: &str = "All Items";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// One selectable sidebar row
#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    pub label: String,
    /// Value for the active-group filter; `None` for "All Items"
    pub group: Option<String>,
    pub count: usize,
    pub active: bool,
}

/// "All Items" followed by each distinct group in alphabetical order.
pub fn group_entries(store: &ItemStore, active_group: Option<&str>) -> Vec<GroupEntry> {
    let mut entries = vec![GroupEntry {
        label: ALL_ITEMS_LABEL.to_string(),
        group: None,
        count: store.len(),
        active: active_group.is_none(),
    }];

    entries.extend(store.groups().into_iter().map(|group| {
        let count = store
            .items()
            .iter()
            .filter(|item| item.effective_group() == group)
            .count();
        GroupEntry {
            label: group.clone(),
            active: active_group == Some(group.as_str()),
            group: Some(group),
            count,
        }
    }));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn make_item(id: u32, group: Option<&str>) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            price: 0.0,
            description: None,
            group: group.map(str::to_string),
            image_filename: None,
        }
    }

    #[test]
    fn test_entries_for_empty_store() {
        let entries = group_entries(&ItemStore::default(), None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "All Items");
        assert!(entries[0].active);
        assert_eq!(entries[0].count, 0);
    }

    #[test]
    fn test_entries_sorted_with_counts() {
        let mut store = ItemStore::default();
        store.replace(vec![
            make_item(1, Some("Sports")),
            make_item(2, None),
            make_item(3, Some("Art")),
            make_item(4, Some("Sports")),
        ]);

        let entries = group_entries(&store, Some("Sports"));
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["All Items", "Art", "General", "Sports"]);
        assert_eq!(entries[0].count, 4);
        assert_eq!(entries[3].count, 2);
        assert!(!entries[0].active);
        assert!(entries[3].active);
        assert_eq!(entries[2].group.as_deref(), Some("General"));
    }

    #[test]
    fn test_entries_follow_store_changes() {
        let mut store = ItemStore::default();
        store.replace(vec![make_item(1, Some("Coins"))]);
        assert_eq!(group_entries(&store, None).len(), 2);

        store.add(make_item(2, Some("Stamps")));
        assert_eq!(group_entries(&store, None).len(), 3);

        store.remove(1);
        let labels: Vec<String> = group_entries(&store, None).into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["All Items", "Stamps"]);
    }
}

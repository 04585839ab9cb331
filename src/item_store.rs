//! Item Store
//!
//! Client-side copy of the catalog between fetches. Items are kept in
//! ascending `id` order: server ids only grow, so a freshly created item
//! lands at the end no matter what order the list endpoint used.

use std::collections::BTreeSet;

use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Replace the whole store with a list response.
    ///
    /// Duplicate ids keep the last occurrence.
    pub fn replace(&mut self, items: Vec<Item>) {
        self.items.clear();
        for item in items {
            self.add(item);
        }
    }

    /// Insert a created item. An item with the same id is replaced in place.
    pub fn add(&mut self, item: Item) {
        match self.items.binary_search_by_key(&item.id, |i| i.id) {
            Ok(pos) => self.items[pos] = item,
            Err(pos) => self.items.insert(pos, item),
        }
    }

    /// Remove by id; `None` if it was not present.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct effective groups, alphabetically sorted
    pub fn groups(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.effective_group().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: ItemId, name: &str, group: Option<&str>) -> Item {
        Item {
            id,
            name: name.to_string(),
            price: 1.0,
            description: None,
            group: group.map(str::to_string),
            image_filename: None,
        }
    }

    fn ids(store: &ItemStore) -> Vec<ItemId> {
        store.items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_replace_orders_by_id() {
        let mut store = ItemStore::default();
        // list endpoint answers newest first
        store.replace(vec![make_item(3, "C", None), make_item(1, "A", None), make_item(2, "B", None)]);
        assert_eq!(ids(&store), vec![1, 2, 3]);

        store.replace(vec![make_item(9, "Z", None)]);
        assert_eq!(ids(&store), vec![9]);
    }

    #[test]
    fn test_add_appends_new_item() {
        let mut store = ItemStore::default();
        store.replace(vec![make_item(1, "Card A", Some("Sports")), make_item(2, "Card B", None)]);
        store.add(make_item(3, "Card C", None));
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_keeps_ids_unique() {
        let mut store = ItemStore::default();
        store.add(make_item(1, "Old", None));
        store.add(make_item(1, "New", None));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().name, "New");
    }

    #[test]
    fn test_remove() {
        let mut store = ItemStore::default();
        store.replace(vec![make_item(1, "A", None), make_item(2, "B", None)]);

        assert_eq!(store.remove(2).map(|i| i.id), Some(2));
        assert!(!store.contains(2));
        assert_eq!(store.remove(2), None);
        assert_eq!(store.remove(42), None);
        assert_eq!(ids(&store), vec![1]);

        store.remove(1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_groups_sorted_and_distinct() {
        let mut store = ItemStore::default();
        store.replace(vec![
            make_item(1, "A", Some("Sports")),
            make_item(2, "B", None),
            make_item(3, "C", Some("Coins")),
            make_item(4, "D", Some("Sports")),
            make_item(5, "E", Some("")),
        ]);
        assert_eq!(store.groups(), vec!["Coins", "General", "Sports"]);
        assert!(ItemStore::default().groups().is_empty());
    }
}

//! Catalog Provider
//!
//! Fixed, in-memory list of purchasable items.

use crate::models::Item;

/// Immutable product catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// All catalog items, in display order
    pub fn list_items(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Item::new(1, "Women Winter Jacket", 100.0),
            Item::new(2, "Men Winter Jacket", 200.0),
            Item::new(3, "Women Winter Top", 300.0),
        ])
    }
}

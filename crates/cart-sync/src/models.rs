//! Cart Models
//!
//! Catalog items, cart entries, and the wire shapes exchanged with the
//! remote collection resource.

use serde::{Deserialize, Serialize};

/// A purchasable catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// An entry in the cart, identified by the id the remote resource assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub remote_id: String,
    pub name: String,
    pub price: f64,
}

/// Stored representation returned by the remote collection.
///
/// Any fields besides `_id`, `name` and `price` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl From<RemoteEntry> for CartEntry {
    fn from(entry: RemoteEntry) -> Self {
        Self {
            remote_id: entry.id,
            name: entry.name,
            price: entry.price,
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NewEntry<'a> {
    pub name: &'a str,
    pub price: f64,
}

impl<'a> From<&'a Item> for NewEntry<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            name: &item.name,
            price: item.price,
        }
    }
}

/// Sum of entry prices (0 for an empty slice)
pub fn total(entries: &[CartEntry]) -> f64 {
    entries.iter().map(|entry| entry.price).sum()
}

/// Local cart state as seen by the UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Entries whose most recent remote operation succeeded, in settlement order
    pub entries: Vec<CartEntry>,
    /// Message of the most recent failed operation
    pub last_error: Option<String>,
    /// Bumped on every settlement; a higher version is a newer state
    pub version: u64,
}

impl CartState {
    pub fn total(&self) -> f64 {
        total(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove the first entry with `remote_id`. Returns whether one was removed.
    pub(crate) fn remove_first(&mut self, remote_id: &str) -> bool {
        match self.entries.iter().position(|e| e.remote_id == remote_id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

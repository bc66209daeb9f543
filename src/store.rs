//! Cart View Store
//!
//! Reactive mirror of the synchronizer's `CartState`, using Leptos
//! reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use cart_sync::{CartEntry, CartState};

/// What the views render, kept in step with the synchronizer
#[derive(Clone, Debug, Default, Store)]
pub struct CartViewState {
    /// Cart entries in settlement order
    pub entries: Vec<CartEntry>,
    /// Most recent failure message, shown in the banners
    pub last_error: Option<String>,
    /// Version of the last applied snapshot
    pub version: u64,
}

/// Type alias for the store
pub type CartStore = Store<CartViewState>;

/// Get the cart store from context
pub fn use_cart_store() -> CartStore {
    expect_context::<CartStore>()
}

/// Copy a synchronizer snapshot into the store, touching only changed fields.
///
/// Snapshots older than the one already applied are ignored.
pub fn store_apply_snapshot(store: &CartStore, snapshot: &CartState) {
    if store.version().get_untracked() > snapshot.version {
        return;
    }
    if store.entries().with_untracked(|entries| *entries != snapshot.entries) {
        *store.entries().write() = snapshot.entries.clone();
    }
    if store.last_error().with_untracked(|err| *err != snapshot.last_error) {
        *store.last_error().write() = snapshot.last_error.clone();
    }
    *store.version().write() = snapshot.version;
}

//! Cart Context
//!
//! The session's synchronizer, provided to every view via Leptos Context API.
//! Operations are spawned on the local executor and never cancelled; their
//! outcome reaches the views through the store.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use cart_sync::{HttpCartSynchronizer, Item, SubscriptionId};

#[derive(Clone, Copy)]
pub struct CartContext {
    sync: StoredValue<Arc<HttpCartSynchronizer>, LocalStorage>,
}

impl CartContext {
    pub fn new(sync: Arc<HttpCartSynchronizer>) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
        }
    }

    /// Seed the cart from the remote collection
    pub fn initialize(&self) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            // Failure is already recorded in the cart's error slot.
            let _ = sync.initialize().await;
        });
    }

    pub fn add_item(&self, item: Item) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.add_item(&item).await;
        });
    }

    pub fn remove_item(&self, remote_id: String) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.remove_item(&remote_id).await;
        });
    }

    pub fn dismiss_error(&self) {
        self.sync.with_value(|sync| sync.dismiss_error());
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.sync.with_value(|sync| sync.unsubscribe(id));
    }
}

/// Get the cart context
pub fn use_cart_context() -> CartContext {
    expect_context::<CartContext>()
}

//! Marketplace Frontend App
//!
//! Builds the session's synchronizer and store, then renders the
//! Marketplace above the Cart.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;
use cart_sync::{CartConfig, Catalog, HttpCartSynchronizer};

use crate::components::{Cart, Marketplace};
use crate::context::CartContext;
use crate::store::{store_apply_snapshot, CartViewState};

#[component]
pub fn App() -> impl IntoView {
    let config = match CartConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid cart configuration");
            return view! {
                <p class="config-error">{format!("Cart unavailable: {}", e)}</p>
            }
            .into_any();
        }
    };
    tracing::info!(api_base = %config.api_base, policy = ?config.error_policy, "starting marketplace");

    let catalog = Catalog::default();
    let sync = Arc::new(HttpCartSynchronizer::from_config(&config));

    // Store mirrors every settled snapshot
    let store = Store::new(CartViewState::default());
    let subscription = sync.subscribe(move |snapshot| store_apply_snapshot(&store, snapshot));
    provide_context(store);

    let ctx = CartContext::new(sync);
    provide_context(ctx);
    on_cleanup(move || ctx.unsubscribe(subscription));

    // Load the cart once on mount
    Effect::new(move |_| ctx.initialize());

    view! {
        <div class="app-layout">
            <Marketplace items=catalog.list_items().to_vec() />
            <Cart />
        </div>
    }
    .into_any()
}

//! Error Banner Component
//!
//! Shows the cart's most recent failure message.

use leptos::prelude::*;

use crate::context::use_cart_context;
use crate::store::{use_cart_store, CartViewStateStoreFields};

/// Banner for the cart's last error
///
/// # Arguments
/// * `dismissable` - Show a × button that clears the error
#[component]
pub fn ErrorBanner(#[prop(optional)] dismissable: bool) -> impl IntoView {
    let store = use_cart_store();
    let ctx = use_cart_context();

    view! {
        {move || store.last_error().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span>{message}</span>
                <Show when=move || dismissable>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>
                        "×"
                    </button>
                </Show>
            </div>
        })}
    }
}

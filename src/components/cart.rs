//! Cart Component
//!
//! Current cart entries with remove buttons, total and item count.

use leptos::prelude::*;
use cart_sync::{total, CartEntry};

use crate::components::ErrorBanner;
use crate::context::use_cart_context;
use crate::format::format_price;
use crate::store::{use_cart_store, CartViewStateStoreFields};

/// Entries paired with their position in the cart
fn cart_rows(entries: Vec<CartEntry>) -> Vec<(usize, CartEntry)> {
    entries.into_iter().enumerate().collect()
}

/// Row key; the remote may hand back duplicate ids, so position is part of it
fn row_key(row: &(usize, CartEntry)) -> (usize, String) {
    (row.0, row.1.remote_id.clone())
}

#[component]
pub fn Cart() -> impl IntoView {
    let store = use_cart_store();
    let ctx = use_cart_context();

    let cart_total = Memo::new(move |_| store.entries().with(|entries| total(entries)));
    let count = Memo::new(move |_| store.entries().with(|entries| entries.len()));

    view! {
        <section class="cart">
            <h1>"Cart"</h1>
            <ErrorBanner dismissable=true />
            <div class="cart-panel">
                <Show
                    when=move || { count.get() > 0 }
                    fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
                >
                    <ul class="cart-entries">
                        <For
                            each=move || cart_rows(store.entries().get())
                            key=row_key
                            children=move |(_, entry)| {
                                let remote_id = entry.remote_id.clone();
                                view! {
                                    <li class="cart-entry">
                                        <span>{format!("{} - {}", entry.name, format_price(entry.price))}</span>
                                        <button
                                            class="remove-btn"
                                            on:click=move |_| ctx.remove_item(remote_id.clone())
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
                <div class="cart-footer">
                    <p class="cart-total">{move || format!("Total: {}", format_price(cart_total.get()))}</p>
                    <p class="cart-count">{move || format!("Items in Cart: {}", count.get())}</p>
                </div>
            </div>
        </section>
    }
}

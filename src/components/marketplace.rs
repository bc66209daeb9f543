//! Marketplace Component
//!
//! One card per catalog item with an "Add to Cart" button.

use leptos::prelude::*;
use cart_sync::Item;

use crate::components::ErrorBanner;
use crate::context::use_cart_context;
use crate::format::format_price;

#[component]
pub fn Marketplace(items: Vec<Item>) -> impl IntoView {
    let ctx = use_cart_context();

    view! {
        <section class="marketplace">
            <h1>"Marketplace"</h1>
            <ErrorBanner />
            <div class="item-grid">
                {items.into_iter().map(|item| {
                    let price = format_price(item.price);
                    let name = item.name.clone();
                    view! {
                        <div class="item-card">
                            <h2>{name}</h2>
                            <p class="item-price">{price}</p>
                            <button
                                class="add-btn"
                                on:click=move |_| ctx.add_item(item.clone())
                            >
                                "Add to Cart"
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

//! Product Card Component
//!
//! Compact product tile (related products) and the shared stock badge.

use catalog_core::format::{format_price, format_stock_status, stock_status_color};
use catalog_core::Product;
use leptos::prelude::*;

use crate::context::{AppContext, Route};

/// Coloured stock status label
#[component]
pub fn StockBadge(stock: u32, availability: Option<String>) -> impl IntoView {
    let color = stock_status_color(stock).as_str();
    let status = format_stock_status(stock, availability.as_deref());

    view! {
        <span class=format!("badge badge-{}", color)>{status}</span>
    }
}

/// Clickable tile; opens the product page
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = product.id;

    view! {
        <div class="product-card" on:click=move |_| ctx.navigate(Route::Product(id))>
            <img class="product-card-image" src=product.thumbnail.clone() alt=product.title.clone() />
            <div class="product-card-body">
                <h3 class="product-card-title">{product.title.clone()}</h3>
                <div class="product-card-meta">
                    <span class="price">{format_price(product.price)}</span>
                    <StockBadge stock=product.stock availability=product.availability_status.clone() />
                </div>
                {product.brand.clone().map(|brand| view! { <p class="product-card-brand">{brand}</p> })}
            </div>
        </div>
    }
}

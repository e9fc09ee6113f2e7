//! Product Page
//!
//! Loads one product by id and shows its detail plus related products.

use catalog_core::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ProductDetail, RelatedProducts};
use crate::context::AppContext;

#[derive(Clone)]
enum Loaded {
    Pending,
    Ready(Product),
    Failed(String),
}

#[component]
pub fn ProductPage(id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let product = RwSignal::new(Loaded::Pending);

    spawn_local(async move {
        let loaded = match commands::get_product(id).await {
            Ok(p) => Loaded::Ready(p),
            Err(e) => {
                log::warn!("Product #{} unavailable: {}", id, e);
                Loaded::Failed(e)
            }
        };
        let _ = product.try_set(loaded);
    });

    view! {
        <div class="product-page">
            <button class="back-button" on:click=move |_| ctx.back()>"← Back"</button>
            {move || match product.get() {
                Loaded::Pending => view! { <p class="loading">"Loading product..."</p> }.into_any(),
                Loaded::Failed(message) => view! {
                    <div class="error-banner">{message}</div>
                }.into_any(),
                Loaded::Ready(p) => {
                    let category = p.category.clone();
                    view! {
                        <ProductDetail product=p />
                        <RelatedProducts category=category exclude_id=id />
                    }.into_any()
                }
            }}
        </div>
    }
}

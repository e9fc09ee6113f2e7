//! Related Products Component
//!
//! "Similar products" row under the product detail. Renders nothing until
//! (and unless) at least one related product comes back.

use catalog_core::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ProductCard;

#[component]
pub fn RelatedProducts(category: String, exclude_id: u32) -> impl IntoView {
    let related = RwSignal::new(Vec::<Product>::new());

    spawn_local(async move {
        let loaded = commands::list_related_products(&category, exclude_id).await;
        log::debug!("{} related products for #{}", loaded.len(), exclude_id);
        // Ignore if the product page was left meanwhile
        let _ = related.try_set(loaded);
    });

    view! {
        <Show when=move || related.with(|r| !r.is_empty())>
            <section class="related-products">
                <h2>"Similar Products"</h2>
                <div class="product-grid">
                    <For
                        each=move || related.get()
                        key=|product| product.id
                        children=|product| view! { <ProductCard product=product /> }
                    />
                </div>
            </section>
        </Show>
    }
}

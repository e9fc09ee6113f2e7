//! Listing Page
//!
//! Inventory and single-category screens: debounced search, filters, result
//! count, product table and "Load More". A fixed category pins the category
//! filter and hides its select.

use catalog_core::format::format_category_name;
use catalog_core::FilterSet;
use leptos::prelude::*;

use crate::components::{ProductFilters, ProductSearch, ProductTable};
use crate::context::AppContext;
use crate::hooks::{use_debounced, use_listing};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListingPage(#[prop(optional, into)] fixed_category: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let config = ctx.config();

    let is_category_page = fixed_category.is_some();
    let initial = FilterSet::new().with_category(fixed_category.as_deref().unwrap_or(""));
    let listing = use_listing(config.listing(), initial);
    let state = listing.state;

    let search_text = RwSignal::new(String::new());
    let search = use_debounced(config.debounce_delay(), move |term: String| {
        listing.edit_filters(|f| f.with_search(&term));
    });

    let is_loading = Signal::derive(move || state.with(|l| l.is_loading()));
    let visible = Signal::derive(move || state.with(|l| l.visible_items()));
    let filters = Signal::derive(move || state.with(|l| l.filters().clone()));
    let categories = Signal::derive(move || store.categories().get());

    let can_clear = move || state.with(|l| l.filters().is_clearable(is_category_page));

    let clear_filters = move |_| {
        search_text.set(String::new());
        search.cancel();
        listing.reset(is_category_page);
    };

    let title = match &fixed_category {
        Some(slug) => format_category_name(slug),
        None => "Inventory".to_string(),
    };

    view! {
        <div class="listing-page">
            <header class="page-header">
                {is_category_page.then(|| view! {
                    <button class="back-button" on:click=move |_| ctx.back()>"← Back"</button>
                })}
                <h1>{title}</h1>
            </header>

            <div class="listing-controls">
                <ProductSearch text=search_text input=search />
                <ProductFilters
                    filters=filters
                    categories=categories
                    on_change=move |f: FilterSet| listing.set_filters(f)
                    disabled=is_loading
                    hide_category=is_category_page
                />
            </div>

            {move || {
                if let Some(message) = state.with(|l| l.error().map(str::to_string)) {
                    return view! {
                        <div class="error-banner">
                            <span>{message}</span>
                            <button on:click=move |_| listing.retry()>"Retry"</button>
                        </div>
                    }
                    .into_any();
                }

                let loaded = state.with(|l| l.is_loaded());
                let count = visible.with(|v| v.len());

                if !loaded {
                    view! { <p class="loading">"Loading products..."</p> }.into_any()
                } else if count == 0 {
                    view! {
                        <div class="empty-state">
                            <h2>"No Products Found"</h2>
                            <p>"We couldn't find any products matching your criteria. Try adjusting your filters or search query."</p>
                            <Show when=can_clear>
                                <button class="primary" on:click=clear_filters>"Reset Filters"</button>
                            </Show>
                        </div>
                    }
                    .into_any()
                } else {
                    let total = state.with(|l| l.total().unwrap_or(0));
                    view! {
                        <div class="result-bar">
                            <span>
                                "Showing " <strong>{count}</strong> " of " <strong>{total}</strong> " products"
                            </span>
                            <Show when=can_clear>
                                <button class="ghost" on:click=clear_filters>"Clear Filters"</button>
                            </Show>
                        </div>
                        <ProductTable products=visible />
                    }
                    .into_any()
                }
            }}

            <Show when=move || state.with(|l| l.can_load_more())>
                <div class="load-more">
                    <button
                        class="primary"
                        prop:disabled=move || is_loading.get()
                        on:click=move |_| listing.load_more()
                    >
                        {move || if is_loading.get() { "Loading..." } else { "Load More Products" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

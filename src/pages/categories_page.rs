//! Categories Page
//!
//! Filterable grid of all categories.

use catalog_core::filter_categories;
use leptos::prelude::*;

use crate::components::CategoryGrid;
use crate::context::AppContext;
use crate::hooks::use_debounced;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (filter_text, set_filter_text) = signal(String::new());
    let (term, set_term) = signal(String::new());
    let filter = use_debounced(ctx.config().debounce_delay(), move |value: String| set_term.set(value));

    let shown = Signal::derive(move || {
        store
            .categories()
            .with(|all| term.with(|t| filter_categories(all, t)))
    });

    view! {
        <div class="categories-page">
            <header class="page-header">
                <h1>"Categories"</h1>
                <input
                    type="search"
                    placeholder="Filter categories..."
                    prop:value=move || filter_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_filter_text.set(value.clone());
                        filter.push(value);
                    }
                />
            </header>

            {move || {
                if !store.categories_loaded().get() {
                    return view! { <p class="loading">"Loading categories..."</p> }.into_any();
                }
                if let Some(message) = store.categories_error().get() {
                    return view! { <div class="error-banner">{message}</div> }.into_any();
                }
                if shown.with(|s| s.is_empty()) {
                    return view! { <p class="empty-state">"No categories match your filter."</p> }.into_any();
                }
                view! { <CategoryGrid categories=shown /> }.into_any()
            }}
        </div>
    }
}

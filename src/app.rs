//! Catalog Viewer Frontend App
//!
//! Root component: provides context and the store, loads the category list
//! once, and switches pages on the current route.

use catalog_core::CatalogConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::Navbar;
use crate::context::{AppContext, Route};
use crate::pages::{CategoriesPage, HomePage, ListingPage, ProductPage};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Categories are static for the session: load once on mount
    spawn_local(async move {
        match commands::list_categories().await {
            Ok(loaded) => {
                log::info!("Loaded {} categories", loaded.len());
                store.categories().set(loaded);
            }
            Err(e) => {
                log::error!("Failed to load categories: {}", e);
                store.categories_error().set(Some(e));
            }
        }
        store.categories_loaded().set(true);
    });

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Inventory => view! { <ListingPage /> }.into_any(),
                    Route::Categories => view! { <CategoriesPage /> }.into_any(),
                    Route::Category(slug) => {
                        view! { <ListingPage fixed_category=slug /> }.into_any()
                    }
                    Route::Product(id) => view! { <ProductPage id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}

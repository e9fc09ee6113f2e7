//! Category Grid Component
//!
//! Category tiles with a thumbnail taken from each category's first product.
//! Thumbnails are fetched once per session, the first time the grid is
//! shown, and kept in the app store.

use catalog_core::format::format_category_name;
use catalog_core::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, Route};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryGrid(#[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Start the prefetch once the category list is in
    Effect::new(move |_| {
        if !store.categories_loaded().get() || store.thumbnails_requested().get_untracked() {
            return;
        }
        store.thumbnails_requested().set(true);
        let all = store.categories().get_untracked();
        spawn_local(async move {
            let thumbnails = commands::category_thumbnails(&all).await;
            store.thumbnails().set(thumbnails);
        });
    });

    view! {
        <div class="category-grid">
            <For
                each=move || categories.get()
                key=|category| category.slug.clone()
                children=move |category| {
                    let slug = category.slug.clone();
                    let target = slug.clone();
                    let name = category.name.clone();
                    let title = format_category_name(&category.slug);
                    let thumbnail = move || store.thumbnails().with(|t| t.get(&slug).cloned());
                    view! {
                        <div
                            class="category-card"
                            on:click=move |_| ctx.navigate(Route::Category(target.clone()))
                        >
                            <div class="category-image">
                                {move || match thumbnail() {
                                    // Not fetched yet
                                    None => view! { <div class="spinner"></div> }.into_any(),
                                    Some(Some(src)) => view! {
                                        <img src=src alt=name.clone() />
                                    }.into_any(),
                                    Some(None) => view! {
                                        <span class="no-image">"No Image"</span>
                                    }.into_any(),
                                }}
                            </div>
                            <h3>{title}</h3>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Navbar Component
//!
//! Top bar with the app title and links to the main screens.

use leptos::prelude::*;

use crate::context::{AppContext, Route};

fn links() -> [(&'static str, Route); 3] {
    [
        ("Home", Route::Home),
        ("Inventory", Route::Inventory),
        ("Categories", Route::Categories),
    ]
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="navbar">
            <button class="navbar-brand" on:click=move |_| ctx.navigate(Route::Home)>
                "Catalog Viewer"
            </button>
            <div class="navbar-links">
                {links().into_iter().map(|(label, route)| {
                    let target = route.clone();
                    let active_for = route;
                    // Category pages belong to "Categories", product pages to nothing
                    let is_active = move || match (ctx.route.get(), &active_for) {
                        (Route::Category(_), Route::Categories) => true,
                        (current, link) => current == *link,
                    };
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| ctx.navigate(target.clone())
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </nav>
    }
}

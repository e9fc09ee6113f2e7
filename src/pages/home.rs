//! Home Page

use leptos::prelude::*;

use crate::context::{AppContext, Route};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Inventory management you can build, adapt, and grow"</h1>
                <p>"Track and manage your inventory with powerful tools and real-time insights."</p>
                <div class="hero-actions">
                    <button class="primary" on:click=move |_| ctx.navigate(Route::Inventory)>
                        "Get Started"
                    </button>
                    <button on:click=move |_| ctx.navigate(Route::Categories)>
                        "Browse Categories"
                    </button>
                </div>
            </section>

            <section class="feature-cards">
                <div class="feature-card" on:click=move |_| ctx.navigate(Route::Inventory)>
                    <h2>"Inventory Management"</h2>
                    <p>"Search, sort and page through every product in the catalog."</p>
                    <span class="feature-link">"View Inventory →"</span>
                </div>
                <div class="feature-card" on:click=move |_| ctx.navigate(Route::Categories)>
                    <h2>"Category Organization"</h2>
                    <p>"Organize your inventory into smart categories for better control and visibility."</p>
                    <span class="feature-link">"Browse Categories →"</span>
                </div>
            </section>
        </div>
    }
}

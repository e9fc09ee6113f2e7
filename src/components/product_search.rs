//! Product Search Component
//!
//! Text field feeding a debounced input. The owning page holds both the
//! text and the debouncer so "Clear Filters" can reset them.

use leptos::prelude::*;

use crate::hooks::DebouncedInput;

#[component]
pub fn ProductSearch(
    text: RwSignal<String>,
    input: DebouncedInput,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or("Search products...");

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        text.set(value.clone());
        input.push(value);
    };

    let on_clear = move |_| {
        text.set(String::new());
        input.submit(String::new());
    };

    view! {
        <div class="product-search">
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=on_input
            />
            <Show when=move || !text.get().is_empty()>
                <button class="search-clear" title="Clear search" on:click=on_clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}

//! Product Filters Component
//!
//! Category, sort field and sort order selects. Each change hands the
//! parent a complete new `FilterSet`.

use catalog_core::{Category, FilterSet, SortField, SortOrder};
use leptos::prelude::*;

#[component]
pub fn ProductFilters(
    #[prop(into)] filters: Signal<FilterSet>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] on_change: Callback<FilterSet>,
    #[prop(into)] disabled: Signal<bool>,
    /// Hide the category select (category pages)
    #[prop(optional)]
    hide_category: bool,
) -> impl IntoView {
    let on_category = move |ev: web_sys::Event| {
        let slug = event_target_value(&ev);
        on_change.run(filters.get_untracked().with_category(&slug));
    };

    let on_sort_by = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        // "" is "None"; anything unknown is treated the same
        let sort_by = value.parse::<SortField>().ok();
        let current = filters.get_untracked();
        on_change.run(current.clone().with_sort(sort_by, current.order));
    };

    let on_order = move |ev: web_sys::Event| {
        let order = event_target_value(&ev).parse::<SortOrder>().unwrap_or_default();
        let current = filters.get_untracked();
        on_change.run(current.clone().with_sort(current.sort_by, order));
    };

    let selected_category = move || filters.with(|f| f.category.clone().unwrap_or_default());
    let selected_sort = move || filters.with(|f| f.sort_by.map(|s| s.as_str()).unwrap_or(""));
    let selected_order = move || filters.with(|f| f.order.as_str());

    view! {
        <div class="product-filters">
            {(!hide_category).then(|| view! {
                <label class="filter">
                    <span class="filter-label">"Category"</span>
                    <select
                        on:change=on_category
                        prop:value=selected_category
                        prop:disabled=move || disabled.get()
                    >
                        <option value="">"All Categories"</option>
                        <For
                            each=move || categories.get()
                            key=|category| category.slug.clone()
                            children=move |category| {
                                let slug = category.slug.clone();
                                let selected = move || selected_category() == slug;
                                view! {
                                    <option value=category.slug.clone() selected=selected>
                                        {category.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
            })}

            <label class="filter">
                <span class="filter-label">"Sort By"</span>
                <select
                    on:change=on_sort_by
                    prop:value=selected_sort
                    prop:disabled=move || disabled.get()
                >
                    <option value="">"None"</option>
                    {SortField::ALL.into_iter().map(|field| view! {
                        <option value=field.as_str() selected=move || selected_sort() == field.as_str()>
                            {field.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <label class="filter">
                <span class="filter-label">"Order"</span>
                // Order means nothing without a sort field
                <select
                    on:change=on_order
                    prop:value=selected_order
                    prop:disabled=move || disabled.get() || filters.with(|f| f.sort_by.is_none())
                >
                    {[SortOrder::Asc, SortOrder::Desc].into_iter().map(|order| view! {
                        <option value=order.as_str() selected=move || selected_order() == order.as_str()>
                            {order.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}

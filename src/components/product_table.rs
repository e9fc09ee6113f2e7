//! Product Table Component
//!
//! Listing rows: image, name, price, brand, category, stock. Rows open the
//! product page.

use catalog_core::format::{format_category_name, format_price};
use catalog_core::Product;
use leptos::prelude::*;

use crate::components::StockBadge;
use crate::context::{AppContext, Route};

#[component]
pub fn ProductTable(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Name"</th>
                    <th>"Price"</th>
                    <th>"Brand"</th>
                    <th>"Category"</th>
                    <th>"Stock Status"</th>
                </tr>
            </thead>
            <tbody>
                // Pages are appended without de-duplication, so key by position too
                <For
                    each=move || products.get().into_iter().enumerate()
                    key=|(index, product)| (*index, product.id)
                    children=move |(_, product)| {
                        let id = product.id;
                        view! {
                            <tr class="product-row" on:click=move |_| ctx.navigate(Route::Product(id))>
                                <td>
                                    <img class="product-thumb" src=product.thumbnail.clone() alt=product.title.clone() />
                                </td>
                                <td class="product-title">{product.title.clone()}</td>
                                <td class="price">{format_price(product.price)}</td>
                                <td>{product.brand.clone().unwrap_or_default()}</td>
                                <td>{format_category_name(&product.category)}</td>
                                <td>
                                    <StockBadge stock=product.stock availability=product.availability_status.clone() />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

//! Product Detail Component
//!
//! Image gallery, pricing, rating, stock and physical attributes of one
//! product.

use catalog_core::format::{format_category_name, format_price};
use catalog_core::Product;
use leptos::prelude::*;

use crate::components::StockBadge;

/// Extra gallery thumbnails after the main image
const GALLERY_EXTRA: usize = 4;

#[component]
pub fn ProductDetail(product: Product) -> impl IntoView {
    let (shown_image, set_shown_image) = signal(product.hero_image().to_string());

    let gallery: Vec<String> = product
        .images
        .iter()
        .skip(1)
        .take(GALLERY_EXTRA)
        .cloned()
        .collect();

    let full_stars = product.rating.floor().clamp(0.0, 5.0) as usize;
    let stars = (0..5)
        .map(|i| if i < full_stars { "★" } else { "☆" })
        .collect::<String>();

    // Attribute rows, only those the API filled in
    let mut attributes: Vec<(&'static str, String)> = Vec::new();
    if let Some(sku) = &product.sku {
        attributes.push(("SKU", sku.clone()));
    }
    if let Some(weight) = product.weight {
        attributes.push(("Weight", format!("{} kg", weight)));
    }
    if let Some(d) = product.dimensions {
        attributes.push(("Dimensions", format!("{} × {} × {} cm", d.width, d.height, d.depth)));
    }
    if let Some(warranty) = &product.warranty_information {
        attributes.push(("Warranty", warranty.clone()));
    }
    if let Some(shipping) = &product.shipping_information {
        attributes.push(("Shipping", shipping.clone()));
    }

    view! {
        <div class="product-detail">
            <div class="product-gallery">
                <img class="product-hero" src=move || shown_image.get() alt=product.title.clone() />
                {(!gallery.is_empty()).then(|| view! {
                    <div class="product-thumbs">
                        {gallery.into_iter().map(|image| {
                            let src = image.clone();
                            view! {
                                <img
                                    class="product-thumb"
                                    src=image
                                    on:click=move |_| set_shown_image.set(src.clone())
                                />
                            }
                        }).collect_view()}
                    </div>
                })}
            </div>

            <div class="product-info">
                <h1>{product.title.clone()}</h1>
                <p class="product-sub">
                    {product.brand.clone().map(|brand| view! { <span class="product-brand">{brand}</span> })}
                    <span class="product-category">{format_category_name(&product.category)}</span>
                </p>

                <div class="product-price">
                    <span class="price">{format_price(product.price)}</span>
                    {product.has_discount().then(|| view! {
                        <span class="badge badge-discount">{format!("{}% OFF", product.discount_percentage)}</span>
                    })}
                </div>

                <div class="product-rating">
                    <span class="stars">{stars}</span>
                    <span>{format!("{} ({} reviews)", product.rating, product.reviews.len())}</span>
                </div>

                <StockBadge stock=product.stock availability=product.availability_status.clone() />

                <p class="product-description">{product.description.clone()}</p>

                <dl class="product-attributes">
                    {attributes.into_iter().map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    }).collect_view()}
                </dl>
            </div>
        </div>
    }
}

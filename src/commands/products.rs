//! Product Commands
//!
//! Listing pages, single products and related products.

use catalog_core::{related_products, CatalogSource, Product, ProductPage, ProductQuery, RelatedConfig};

use super::catalog;

pub async fn list_products(query: &ProductQuery) -> Result<ProductPage, String> {
    catalog().products(query).await.map_err(|e| e.user_message())
}

pub async fn get_product(id: u32) -> Result<Product, String> {
    catalog().product(id).await.map_err(|e| e.user_message())
}

/// Never fails: an empty list means "show nothing"
pub async fn list_related_products(category: &str, exclude_id: u32) -> Vec<Product> {
    related_products(&catalog(), category, exclude_id, RelatedConfig::default()).await
}

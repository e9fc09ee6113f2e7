//! Catalog Source Trait
//!
//! Abstract read-only interface to the catalog service.
//! `HttpCatalog` talks to the real API; tests use in-memory sources.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Category, Product, ProductPage};
use crate::query::ProductQuery;

/// Read-only catalog access
///
/// Futures are not `Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Listing / search / category page
    async fn products(&self, query: &ProductQuery) -> Result<ProductPage>;

    /// Single product by id (`CatalogError::NotFound` on a miss)
    async fn product(&self, id: u32) -> Result<Product>;

    /// Full category list
    async fn categories(&self) -> Result<Vec<Category>>;
}

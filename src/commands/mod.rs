//! Catalog Commands
//!
//! Frontend bindings to the catalog API, organized by domain.
//! Errors come back as display-ready strings.

mod categories;
mod products;

use catalog_core::{CatalogConfig, HttpCatalog};
use std::cell::RefCell;

thread_local! {
    static CATALOG: RefCell<Option<HttpCatalog>> = const { RefCell::new(None) };
}

/// Point all commands at the configured API
pub fn init(config: &CatalogConfig) {
    CATALOG.with(|c| *c.borrow_mut() = Some(HttpCatalog::from_config(config)));
}

fn catalog() -> HttpCatalog {
    CATALOG
        .with(|c| c.borrow().clone())
        .unwrap_or_else(|| HttpCatalog::from_config(&CatalogConfig::default()))
}

// Re-export all public items
pub use categories::*;
pub use products::*;

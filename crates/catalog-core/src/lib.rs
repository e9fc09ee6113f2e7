//! Catalog Core
//!
//! Platform-independent pieces of the catalog viewer:
//! - model: products, categories, listing pages
//! - query / source / http: routing and fetching from the catalog API
//! - listing: incremental "load more" accumulator
//! - debounce: quiet-period coalescing of search input
//! - related / categories: multi-request lookups (recommendations, thumbnails)
//! - format: display helpers

pub mod categories;
pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod http;
pub mod listing;
pub mod model;
pub mod query;
pub mod related;
pub mod source;

#[cfg(test)]
mod testing;

pub use categories::{filter_categories, prefetch_thumbnails, ThumbnailMap};
pub use config::CatalogConfig;
pub use debounce::{Debouncer, Ticket};
pub use error::{CatalogError, Result};
pub use http::HttpCatalog;
pub use listing::{FetchRequest, FilterSet, Listing, ListingConfig, PageWindow, RequestTag};
pub use model::{Category, Dimensions, Product, ProductPage, Review, SortField, SortOrder};
pub use query::{ProductQuery, QueryRoute};
pub use related::{related_products, RelatedConfig};
pub use source::CatalogSource;

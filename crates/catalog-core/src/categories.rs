//! Category Helpers
//!
//! Thumbnail prefetch for the category grid and client-side category filter.

use futures::future::join_all;
use log::{debug, error};
use std::collections::HashMap;

use crate::model::Category;
use crate::query::ProductQuery;
use crate::source::CatalogSource;

/// slug -> first product thumbnail (`None` shows "No Image")
pub type ThumbnailMap = HashMap<String, Option<String>>;

/// Fetch one product per category, all at once, and collect their thumbnails
///
/// Waits for every request; a failing category is logged and left `None`.
pub async fn prefetch_thumbnails<S>(source: &S, categories: &[Category]) -> ThumbnailMap
where
    S: CatalogSource + ?Sized,
{
    let fetches = categories.iter().map(|category| async move {
        let query = ProductQuery::category(category.slug.clone()).limit(1).skip(0);
        let thumbnail = match source.products(&query).await {
            Ok(page) => page
                .products
                .into_iter()
                .next()
                .map(|p| p.thumbnail)
                .filter(|t| !t.is_empty()),
            Err(e) => {
                error!("Failed to fetch image for category {}: {}", category.slug, e);
                None
            }
        };
        (category.slug.clone(), thumbnail)
    });

    let thumbnails: ThumbnailMap = join_all(fetches).await.into_iter().collect();
    debug!(
        "Prefetched {}/{} category thumbnails",
        thumbnails.values().filter(|t| t.is_some()).count(),
        thumbnails.len()
    );
    thumbnails
}

/// Case-insensitive match on name or slug; a blank term keeps everything
pub fn filter_categories(categories: &[Category], term: &str) -> Vec<Category> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return categories.to_vec();
    }
    categories
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&term) || c.slug.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

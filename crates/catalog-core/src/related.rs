//! Related Products
//!
//! "Browse similar products": a few items from the same category, minus the
//! one being viewed. Recommendations are cosmetic, so any failure yields an
//! empty list instead of an error or a partial set.

use log::{debug, warn};

use crate::error::Result;
use crate::model::Product;
use crate::query::ProductQuery;
use crate::source::CatalogSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedConfig {
    /// Products shown
    pub limit: usize,
    /// Category page size per request
    pub page_size: u32,
    /// Hard cap on requests
    pub max_pages: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: 6,
            page_size: 30,
            max_pages: 3,
        }
    }
}

impl RelatedConfig {
    /// One spare so excluding the current product still leaves `limit`
    fn wanted(&self) -> usize {
        self.limit + 1
    }
}

/// Up to `config.limit` products from `category`, excluding `exclude_id`
pub async fn related_products<S>(
    source: &S,
    category: &str,
    exclude_id: u32,
    config: RelatedConfig,
) -> Vec<Product>
where
    S: CatalogSource + ?Sized,
{
    if category.is_empty() {
        return Vec::new();
    }

    match collect_candidates(source, category, config).await {
        Ok(candidates) => {
            let related: Vec<Product> = candidates
                .into_iter()
                .filter(|p| p.id != exclude_id)
                .take(config.limit)
                .collect();
            debug!("{} related products for {} in {}", related.len(), exclude_id, category);
            related
        }
        Err(e) => {
            warn!("Related products for {} unavailable: {}", category, e);
            Vec::new()
        }
    }
}

async fn collect_candidates<S>(source: &S, category: &str, config: RelatedConfig) -> Result<Vec<Product>>
where
    S: CatalogSource + ?Sized,
{
    let page_size = config.page_size.max(1);
    let mut collected: Vec<Product> = Vec::new();
    let mut skip = 0u32;
    let mut pages = 0usize;

    while collected.len() < config.wanted() && pages < config.max_pages {
        let query = ProductQuery::category(category).limit(page_size).skip(skip);
        let page = source.products(&query).await?;
        pages += 1;

        let received = page.products.len();
        collected.extend(page.products);

        // Short page: end of the category
        if received < page_size as usize {
            break;
        }
        skip += page_size;
    }

    Ok(collected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, FakeCatalog};

    fn catalog_with(category: &str, count: u32) -> FakeCatalog {
        FakeCatalog::new((1..=count).map(|id| product(id, category)).collect())
    }

    #[tokio::test]
    async fn test_small_category_capped_by_availability() {
        let catalog = catalog_with("smartphones", 5);

        let related = related_products(&catalog, "smartphones", 3, RelatedConfig::default()).await;

        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id != 3));
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn test_large_category_truncated_to_limit() {
        let catalog = catalog_with("laptops", 50);

        let related = related_products(&catalog, "laptops", 2, RelatedConfig::default()).await;

        let ids: Vec<u32> = related.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6, 7]);
        // A full first page already covers the buffer
        assert_eq!(catalog.calls(), 1);
        assert_eq!(
            catalog.requests()[0].to_path(),
            "/products/category/laptops?limit=30&skip=0"
        );
    }

    #[tokio::test]
    async fn test_walks_pages_until_enough() {
        let catalog = catalog_with("tops", 20);
        let config = RelatedConfig {
            page_size: 3,
            ..Default::default()
        };

        let related = related_products(&catalog, "tops", 1, config).await;

        // 3 pages x 3 = 9 candidates >= 7, minus the excluded one
        assert_eq!(related.len(), 6);
        assert_eq!(catalog.calls(), 3);
        assert_eq!(catalog.requests()[2].skip, Some(6));
    }

    #[tokio::test]
    async fn test_page_cap_limits_requests() {
        let catalog = catalog_with("tops", 20);
        let config = RelatedConfig {
            page_size: 2,
            ..Default::default()
        };

        let related = related_products(&catalog, "tops", 99, config).await;

        // Capped at 3 pages of 2
        assert_eq!(catalog.calls(), 3);
        assert_eq!(related.len(), 6);
    }

    #[tokio::test]
    async fn test_failure_on_second_page_discards_partial_results() {
        let catalog = catalog_with("tops", 20).fail_on_call(2);
        let config = RelatedConfig {
            page_size: 3,
            ..Default::default()
        };

        let related = related_products(&catalog, "tops", 1, config).await;

        assert!(related.is_empty());
        assert_eq!(catalog.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_category_yields_nothing() {
        let catalog = catalog_with("tops", 0);
        assert!(related_products(&catalog, "tops", 1, RelatedConfig::default()).await.is_empty());

        assert!(related_products(&catalog, "", 1, RelatedConfig::default()).await.is_empty());
        assert_eq!(catalog.calls(), 1);
    }
}

//! Category Commands

use catalog_core::{prefetch_thumbnails, CatalogSource, Category, ThumbnailMap};

use super::catalog;

pub async fn list_categories() -> Result<Vec<Category>, String> {
    catalog().categories().await.map_err(|e| e.user_message())
}

/// One request per category, joined; failures leave that slot empty
pub async fn category_thumbnails(categories: &[Category]) -> ThumbnailMap {
    prefetch_thumbnails(&catalog(), categories).await
}

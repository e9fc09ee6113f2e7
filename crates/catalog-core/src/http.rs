//! HTTP Catalog Client
//!
//! `CatalogSource` over the public catalog REST API using reqwest
//! (browser fetch on wasm32). Read-only GETs, JSON bodies.

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, ProductPage};
use crate::query::ProductQuery;
use crate::source::CatalogSource;

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            CatalogError::fetch(&url, None, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(CatalogError::fetch(&url, Some(status.as_u16()), status.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::fetch(&url, Some(status.as_u16()), e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("GET {} returned malformed body: {}", url, e);
            CatalogError::from(e)
        })
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn products(&self, query: &ProductQuery) -> Result<ProductPage> {
        let page: ProductPage = self.get_json(&query.to_path()).await?;
        debug!(
            "Loaded {} of {} products (skip={})",
            page.products.len(),
            page.total,
            page.skip
        );
        Ok(page)
    }

    async fn product(&self, id: u32) -> Result<Product> {
        match self.get_json(&format!("/products/{}", id)).await {
            Err(err) if err.status() == Some(404) => Err(CatalogError::NotFound(id)),
            other => other,
        }
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        let categories: Vec<Category> = self.get_json("/products/categories").await?;
        debug!("Loaded {} categories", categories.len());
        Ok(categories)
    }
}

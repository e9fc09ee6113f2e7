//! In-memory catalog for tests.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::model::{Category, Product, ProductPage};
use crate::query::{ProductQuery, QueryRoute};
use crate::source::CatalogSource;

pub(crate) fn product(id: u32, category: &str) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        category: category.to_string(),
        price: 10.0 + id as f64,
        stock: 20,
        thumbnail: format!("https://cdn.test/{}/{}.png", category, id),
        ..Default::default()
    }
}

pub(crate) fn category(slug: &str) -> Category {
    Category {
        slug: slug.to_string(),
        name: crate::format::format_category_name(slug),
        url: None,
    }
}

#[derive(Default)]
pub(crate) struct FakeCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    failing_categories: HashSet<String>,
    fail_on_call: Option<usize>,
    calls: Cell<usize>,
    requests: RefCell<Vec<ProductQuery>>,
}

impl FakeCatalog {
    pub(crate) fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub(crate) fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Every listing request for this category fails
    pub(crate) fn failing_category(mut self, slug: &str) -> Self {
        self.failing_categories.insert(slug.to_string());
        self
    }

    /// The n-th listing request (1-based) fails
    pub(crate) fn fail_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn requests(&self) -> Vec<ProductQuery> {
        self.requests.borrow().clone()
    }

    fn server_error(query: &ProductQuery) -> CatalogError {
        CatalogError::fetch(query.to_path(), Some(500), "Internal Server Error")
    }
}

#[async_trait(?Send)]
impl CatalogSource for FakeCatalog {
    async fn products(&self, query: &ProductQuery) -> Result<ProductPage> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        self.requests.borrow_mut().push(query.clone());

        if self.fail_on_call == Some(call) {
            return Err(Self::server_error(query));
        }

        let matching: Vec<&Product> = match query.route() {
            QueryRoute::All => self.products.iter().collect(),
            QueryRoute::Search(text) => {
                let needle = text.to_lowercase();
                self.products
                    .iter()
                    .filter(|p| p.title.to_lowercase().contains(&needle))
                    .collect()
            }
            QueryRoute::Category(slug) => {
                if self.failing_categories.contains(slug) {
                    return Err(Self::server_error(query));
                }
                self.products.iter().filter(|p| p.category == slug).collect()
            }
        };

        let skip = query.skip.unwrap_or(0);
        let limit = query.limit.unwrap_or(30);
        Ok(ProductPage {
            products: matching
                .iter()
                .skip(skip as usize)
                .take(limit as usize)
                .map(|p| (*p).clone())
                .collect(),
            total: matching.len() as u32,
            skip,
            limit,
        })
    }

    async fn product(&self, id: u32) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }
}

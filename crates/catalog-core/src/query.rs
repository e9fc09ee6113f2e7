//! Product Queries
//!
//! Maps a query descriptor onto one of the catalog listing endpoints:
//! - search text wins over category (category is ignored when searching)
//! - category scopes to `/products/category/{slug}`
//! - otherwise the unscoped `/products`
//!
//! Paging and sorting parameters are appended only when present.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::model::{SortField, SortOrder};

/// Characters left unescaped in query values and path segments
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
    pub select: Option<String>,
}

/// Endpoint chosen for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRoute<'a> {
    All,
    Search(&'a str),
    Category(&'a str),
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.order = Some(order);
        self
    }

    /// Decide which endpoint serves this query
    pub fn route(&self) -> QueryRoute<'_> {
        let search = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let category = self.category.as_deref().filter(|s| !s.is_empty());

        match (search, category) {
            (Some(text), _) => QueryRoute::Search(text),
            (None, Some(slug)) => QueryRoute::Category(slug),
            (None, None) => QueryRoute::All,
        }
    }

    /// Request path (relative to the API base URL), including the query string
    pub fn to_path(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        let mut path = match self.route() {
            QueryRoute::All => "/products".to_string(),
            QueryRoute::Search(text) => {
                params.push(format!("q={}", encode(text)));
                "/products/search".to_string()
            }
            QueryRoute::Category(slug) => format!("/products/category/{}", encode(slug)),
        };

        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(sort_by) = self.sort_by {
            params.push(format!("sortBy={}", sort_by));
        }
        if let Some(order) = self.order {
            params.push(format!("order={}", order));
        }
        if let Some(select) = self.select.as_deref().filter(|s| !s.is_empty()) {
            params.push(format!("select={}", encode(select)));
        }

        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }
        path
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscoped_listing_without_params() {
        assert_eq!(ProductQuery::all().to_path(), "/products");
    }

    #[test]
    fn test_search_takes_precedence_over_category() {
        let query = ProductQuery {
            search: Some("phone case".into()),
            category: Some("smartphones".into()),
            limit: Some(100),
            skip: Some(0),
            ..Default::default()
        };
        assert_eq!(query.route(), QueryRoute::Search("phone case"));
        assert_eq!(query.to_path(), "/products/search?q=phone%20case&limit=100&skip=0");
    }

    #[test]
    fn test_blank_search_falls_back_to_category() {
        let query = ProductQuery {
            search: Some("   ".into()),
            category: Some("mens-shirts".into()),
            ..Default::default()
        };
        assert_eq!(query.route(), QueryRoute::Category("mens-shirts"));
        assert_eq!(query.to_path(), "/products/category/mens-shirts");
    }

    #[test]
    fn test_paging_and_sort_params_in_order() {
        let query = ProductQuery::all()
            .limit(20)
            .skip(40)
            .sort(SortField::Price, SortOrder::Desc);
        assert_eq!(query.to_path(), "/products?limit=20&skip=40&sortBy=price&order=desc");

        let query = ProductQuery::category("laptops").limit(30).skip(0);
        assert_eq!(query.to_path(), "/products/category/laptops?limit=30&skip=0");
    }

    #[test]
    fn test_select_is_encoded() {
        let query = ProductQuery {
            select: Some("title,price".into()),
            ..Default::default()
        };
        assert_eq!(query.to_path(), "/products?select=title%2Cprice");
    }
}

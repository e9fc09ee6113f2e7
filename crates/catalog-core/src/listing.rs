//! Listing Accumulator
//!
//! Incremental "load more" listing for one filter set at a time.
//!
//! Every transition returns the fetch the caller should issue (if any). The
//! fetch carries a `RequestTag`; its response is fed back through `apply` or
//! `fail` with the same tag. Responses whose tag is no longer the in-flight
//! one (superseded by a filter change) are dropped without touching items.
//!
//! Pages are appended as they arrive; nothing is de-duplicated across pages.

use log::debug;

use crate::config::{DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_PAGE_SIZE};
use crate::model::{Product, ProductPage, SortField, SortOrder};
use crate::query::ProductQuery;

// ========================
// Filter Set
// ========================

/// Identity of a query: changing any field starts a new listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = non_blank(search);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = non_blank(category);
        self
    }

    pub fn with_sort(mut self, sort_by: Option<SortField>, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Anything "Clear Filters" would undo; a pinned category does not count
    pub fn is_clearable(&self, keep_category: bool) -> bool {
        self.search.is_some() || self.sort_by.is_some() || (!keep_category && self.category.is_some())
    }

    /// Query for one page of this filter set; order is only sent with a sort field
    pub fn to_query(&self, page: PageWindow) -> ProductQuery {
        ProductQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            limit: Some(page.limit),
            skip: Some(page.skip),
            sort_by: self.sort_by,
            order: self.sort_by.map(|_| self.order),
            select: None,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ========================
// Paging
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u32,
    pub skip: u32,
}

impl PageWindow {
    pub fn first(limit: u32) -> Self {
        Self { limit, skip: 0 }
    }

    pub fn next(self) -> Self {
        Self {
            limit: self.limit,
            skip: self.skip + self.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    pub page_size: u32,
    pub search_page_size: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
        }
    }
}

impl ListingConfig {
    fn limit_for(&self, filters: &FilterSet) -> u32 {
        let limit = if filters.search.is_some() {
            self.search_page_size
        } else {
            self.page_size
        };
        limit.max(1)
    }
}

/// Identifies which filter generation and page a fetch was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    generation: u64,
    skip: u32,
}

impl RequestTag {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn skip(&self) -> u32 {
        self.skip
    }
}

/// A fetch the caller should run and report back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub tag: RequestTag,
    pub query: ProductQuery,
}

// ========================
// Listing
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    config: ListingConfig,
    filters: FilterSet,
    page: PageWindow,
    items: Vec<Product>,
    total: Option<u32>,
    error: Option<String>,
    generation: u64,
    in_flight: Option<RequestTag>,
}

impl Listing {
    pub fn new(config: ListingConfig) -> Self {
        Self::with_filters(config, FilterSet::default())
    }

    pub fn with_filters(config: ListingConfig, filters: FilterSet) -> Self {
        let page = PageWindow::first(config.limit_for(&filters));
        Self {
            config,
            filters,
            page,
            items: Vec::new(),
            total: None,
            error: None,
            generation: 0,
            in_flight: None,
        }
    }

    /// Start over with new filters: items cleared, skip back to 0
    ///
    /// Returns `None` when the filters are unchanged and a fetch was already issued.
    pub fn change_filters(&mut self, filters: FilterSet) -> Option<FetchRequest> {
        if filters == self.filters && self.generation > 0 {
            return None;
        }
        self.filters = filters;
        Some(self.refresh())
    }

    /// Drop all filters ("Clear Filters"); keeps a fixed category if given
    pub fn reset(&mut self, keep_category: bool) -> Option<FetchRequest> {
        let mut filters = FilterSet::default();
        if keep_category {
            filters.category = self.filters.category.clone();
        }
        self.change_filters(filters)
    }

    /// Begin a new generation for the current filters (initial load, retry)
    pub fn refresh(&mut self) -> FetchRequest {
        self.generation += 1;
        self.items.clear();
        self.total = None;
        self.error = None;
        self.page = PageWindow::first(self.config.limit_for(&self.filters));
        debug!(
            "Listing generation {} for {:?}",
            self.generation, self.filters
        );
        self.issue()
    }

    /// Advance to the next page, if the server reported more and nothing is in flight
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() || self.in_flight.is_some() {
            return None;
        }
        self.page = self.page.next();
        Some(self.issue())
    }

    /// Retry after an error: the failed page again once something has loaded,
    /// otherwise the first page from scratch
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.is_loaded() {
            self.load_more()
        } else {
            Some(self.refresh())
        }
    }

    /// Integrate a successful page. Returns false when the response was stale.
    pub fn apply(&mut self, tag: RequestTag, page: ProductPage) -> bool {
        if self.in_flight != Some(tag) {
            debug!("Dropping stale page (generation {}, skip {})", tag.generation, tag.skip);
            return false;
        }
        self.in_flight = None;
        self.error = None;
        self.total = Some(page.total);

        if tag.skip == 0 {
            self.items = page.products;
        } else {
            self.items.extend(page.products);
        }
        true
    }

    /// Record a failed fetch. Items are left as they were.
    pub fn fail(&mut self, tag: RequestTag, message: impl Into<String>) -> bool {
        if self.in_flight != Some(tag) {
            return false;
        }
        self.in_flight = None;
        self.error = Some(message.into());
        if tag.skip > 0 {
            // Failed "load more": allow retrying the same page
            self.page.skip = tag.skip.saturating_sub(self.page.limit);
        }
        true
    }

    /// "Load more" is offered while `skip + limit < total`
    pub fn can_load_more(&self) -> bool {
        match self.total {
            Some(total) => self.page.skip + self.page.limit < total,
            None => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True once the first page for the current filters has landed
    pub fn is_loaded(&self) -> bool {
        self.total.is_some()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Items to display: while searching, only titles containing the term
    pub fn visible_items(&self) -> Vec<Product> {
        match self.filters.search_term() {
            Some(term) => {
                let needle = term.to_lowercase();
                self.items
                    .iter()
                    .filter(|p| p.title.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => self.items.clone(),
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> PageWindow {
        self.page
    }

    pub fn total(&self) -> Option<u32> {
        self.total
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn issue(&mut self) -> FetchRequest {
        let tag = RequestTag {
            generation: self.generation,
            skip: self.page.skip,
        };
        self.in_flight = Some(tag);
        FetchRequest {
            tag,
            query: self.filters.to_query(self.page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    fn config(page_size: u32) -> ListingConfig {
        ListingConfig {
            page_size,
            search_page_size: 100,
        }
    }

    fn page_of(ids: std::ops::Range<u32>, total: u32, skip: u32, limit: u32) -> ProductPage {
        ProductPage {
            products: ids.map(|id| product(id, "laptops")).collect(),
            total,
            skip,
            limit,
        }
    }

    #[test]
    fn test_initial_refresh_requests_first_page() {
        let mut listing = Listing::new(config(20));
        let req = listing.refresh();

        assert_eq!(req.tag.skip(), 0);
        assert_eq!(req.query.to_path(), "/products?limit=20&skip=0");
        assert!(listing.is_loading());
        assert!(!listing.can_load_more());
    }

    #[test]
    fn test_filter_change_clears_items_and_resets_skip() {
        let mut listing = Listing::new(config(20));
        let first = listing.refresh();
        assert!(listing.apply(first.tag, page_of(0..20, 100, 0, 20)));
        let more = listing.load_more().unwrap();
        assert!(listing.apply(more.tag, page_of(20..40, 100, 20, 20)));
        assert_eq!(listing.items().len(), 40);
        assert_eq!(listing.page().skip, 20);

        let req = listing
            .change_filters(FilterSet::new().with_category("laptops"))
            .unwrap();

        // Cleared before anything new arrives
        assert!(listing.items().is_empty());
        assert_eq!(listing.page().skip, 0);
        assert_eq!(req.tag.skip(), 0);
        assert_eq!(req.query.to_path(), "/products/category/laptops?limit=20&skip=0");
    }

    #[test]
    fn test_unchanged_filters_issue_nothing() {
        let mut listing = Listing::with_filters(config(20), FilterSet::new().with_category("laptops"));
        listing.refresh();
        assert!(listing
            .change_filters(FilterSet::new().with_category(" laptops "))
            .is_none());
    }

    #[test]
    fn test_same_filters_on_fresh_listing_still_fetch() {
        let mut listing = Listing::new(config(20));
        let req = listing.change_filters(FilterSet::new()).unwrap();
        assert_eq!(req.query.to_path(), "/products?limit=20&skip=0");
        assert!(listing.is_loading());
    }

    #[test]
    fn test_load_more_appends_exactly_the_returned_page() {
        let mut listing = Listing::new(config(20));
        let first = listing.refresh();
        listing.apply(first.tag, page_of(0..20, 45, 0, 20));
        assert!(listing.can_load_more());

        let before = listing.items().len();
        let more = listing.load_more().unwrap();
        assert_eq!(more.query.skip, Some(20));
        listing.apply(more.tag, page_of(20..40, 45, 20, 20));
        assert_eq!(listing.items().len(), before + 20);

        let last = listing.load_more().unwrap();
        listing.apply(last.tag, page_of(40..45, 45, 40, 20));
        assert_eq!(listing.items().len(), 45);
        assert_eq!(listing.items()[44].id, 44);
        // 40 + 20 >= 45
        assert!(!listing.can_load_more());
        assert!(listing.load_more().is_none());
    }

    #[test]
    fn test_stale_response_never_mutates_items() {
        let mut listing = Listing::new(config(20));
        let old = listing.refresh();
        let new = listing
            .change_filters(FilterSet::new().with_search("phone"))
            .unwrap();

        // Old generation lands late
        assert!(!listing.apply(old.tag, page_of(0..20, 194, 0, 20)));
        assert!(listing.items().is_empty());
        assert!(listing.is_loading());

        assert!(listing.apply(new.tag, page_of(100..105, 5, 0, 100)));
        assert_eq!(listing.items().len(), 5);

        // And once more after the current one landed
        assert!(!listing.apply(old.tag, page_of(0..20, 194, 0, 20)));
        assert!(!listing.fail(old.tag, "boom"));
        assert_eq!(listing.items().len(), 5);
        assert_eq!(listing.error(), None);
    }

    #[test]
    fn test_load_more_blocked_while_in_flight() {
        let mut listing = Listing::new(config(10));
        let first = listing.refresh();
        listing.apply(first.tag, page_of(0..10, 50, 0, 10));

        let more = listing.load_more().unwrap();
        assert!(listing.load_more().is_none());
        listing.apply(more.tag, page_of(10..20, 50, 10, 10));
        assert!(listing.load_more().is_some());
    }

    #[test]
    fn test_failed_load_more_keeps_items_and_allows_retry() {
        let mut listing = Listing::new(config(10));
        let first = listing.refresh();
        listing.apply(first.tag, page_of(0..10, 50, 0, 10));

        let more = listing.load_more().unwrap();
        assert!(listing.fail(more.tag, "HTTP 500"));
        assert_eq!(listing.items().len(), 10);
        assert_eq!(listing.error(), Some("HTTP 500"));
        assert_eq!(listing.page().skip, 0);

        let retry = listing.load_more().unwrap();
        assert_eq!(retry.tag.skip(), 10);
        listing.apply(retry.tag, page_of(10..20, 50, 10, 10));
        assert_eq!(listing.items().len(), 20);
        assert_eq!(listing.error(), None);
    }

    #[test]
    fn test_retry_after_failed_load_more_keeps_items() {
        let mut listing = Listing::new(config(10));
        let first = listing.refresh();
        listing.apply(first.tag, page_of(0..10, 30, 0, 10));
        let more = listing.load_more().unwrap();
        listing.fail(more.tag, "HTTP 502");

        let retry = listing.retry().unwrap();
        assert_eq!(retry.tag.skip(), 10);
        assert_eq!(retry.query.to_path(), "/products?limit=10&skip=10");
        assert_eq!(listing.items().len(), 10);

        listing.apply(retry.tag, page_of(10..20, 30, 10, 10));
        assert_eq!(listing.items().len(), 20);
        assert_eq!(listing.items()[10].id, 10);
    }

    #[test]
    fn test_retry_after_failed_first_page_starts_over() {
        let mut listing = Listing::new(config(10));
        let first = listing.refresh();
        listing.fail(first.tag, "HTTP 500");
        assert!(!listing.is_loaded());

        let retry = listing.retry().unwrap();
        assert_eq!(retry.tag.skip(), 0);
        assert_ne!(retry.tag, first.tag);
        assert_eq!(listing.error(), None);
    }

    #[test]
    fn test_clearable_ignores_pinned_category() {
        let pinned = FilterSet::new().with_category("groceries");
        assert!(!pinned.is_clearable(true));
        assert!(pinned.is_clearable(false));

        let searched = pinned.clone().with_search("apple");
        assert!(searched.is_clearable(true));

        let sorted = pinned.with_sort(Some(SortField::Rating), SortOrder::Asc);
        assert!(sorted.is_clearable(true));
        assert!(!FilterSet::new().is_clearable(false));
    }

    #[test]
    fn test_search_uses_search_page_size_and_narrows_titles() {
        let mut listing = Listing::new(config(20));
        listing.refresh();
        let req = listing
            .change_filters(FilterSet::new().with_search("Case"))
            .unwrap();
        assert_eq!(req.query.to_path(), "/products/search?q=Case&limit=100&skip=0");

        let mut page = page_of(0..3, 3, 0, 100);
        page.products[0].title = "Phone Case".into();
        page.products[1].title = "Laptop".into();
        page.products[2].title = "Pencil case".into();
        listing.apply(req.tag, page);

        assert_eq!(listing.items().len(), 3);
        let visible: Vec<u32> = listing.visible_items().iter().map(|p| p.id).collect();
        assert_eq!(visible, vec![0, 2]);
    }

    #[test]
    fn test_reset_keeps_fixed_category() {
        let filters = FilterSet::new()
            .with_category("groceries")
            .with_sort(Some(SortField::Price), SortOrder::Desc);
        let mut listing = Listing::with_filters(config(20), filters);
        listing.refresh();

        let req = listing.reset(true).unwrap();
        assert_eq!(listing.filters().category.as_deref(), Some("groceries"));
        assert!(listing.filters().sort_by.is_none());
        assert_eq!(req.query.order, None);

        let req = listing.reset(false).unwrap();
        assert!(!listing.filters().is_clearable(false));
        assert_eq!(req.query.to_path(), "/products?limit=20&skip=0");
    }
}

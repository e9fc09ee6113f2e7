//! Catalog Configuration
//!
//! All fields default, so a partial object (or none at all) is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::listing::ListingConfig;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 100;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// API base URL (no trailing slash needed)
    pub base_url: String,
    /// Listing page size ("load more" step)
    pub page_size: u32,
    /// Page size while a search term is active
    pub search_page_size: u32,
    /// Search input quiet period
    pub debounce_ms: u64,
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(text).map(Self::normalized)
    }

    /// Replace unusable values with defaults
    pub fn normalized(mut self) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = DEFAULT_BASE_URL.to_string();
        }
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.search_page_size == 0 {
            self.search_page_size = self.page_size;
        }
        self
    }

    pub fn listing(&self) -> ListingConfig {
        ListingConfig {
            page_size: self.page_size,
            search_page_size: self.search_page_size,
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

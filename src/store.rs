//! Global Application State Store
//!
//! Session-wide catalog data, fetched once: the category list and the
//! per-category thumbnails shown on the category grid.

use catalog_core::{Category, ThumbnailMap};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All categories (static for the session)
    pub categories: Vec<Category>,
    /// Category list request finished (successfully or not)
    pub categories_loaded: bool,
    /// Message shown when the category list failed
    pub categories_error: Option<String>,
    /// slug -> thumbnail; a missing key means still loading
    pub thumbnails: ThumbnailMap,
    /// Thumbnail prefetch has been started this session
    pub thumbnails_requested: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

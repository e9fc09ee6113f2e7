//! Reactive Hooks
//!
//! Glue between the catalog state machines and Leptos signals:
//! - `use_debounced`: quiet-period search input (gloo timers)
//! - `use_listing`: listing accumulator driving product fetches

use catalog_core::{Debouncer, FetchRequest, FilterSet, Listing, ListingConfig};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;

use crate::commands;

// ========================
// Debounce
// ========================

/// Debounced text input; `on_settled` runs once input has been quiet for the delay
#[derive(Clone, Copy)]
pub struct DebouncedInput {
    debouncer: StoredValue<Debouncer<String>>,
    on_settled: Callback<String>,
}

impl DebouncedInput {
    /// Record a keystroke value, restarting the quiet period
    pub fn push(&self, value: String) {
        let now = Duration::from_millis(js_sys::Date::now() as u64);
        let Some(ticket) = self.debouncer.try_update_value(|d| d.push(value, now)) else {
            return;
        };
        let delay_ms = self
            .debouncer
            .with_value(|d| d.delay().as_millis())
            .min(u32::MAX as u128) as u32;

        let debouncer = self.debouncer;
        let on_settled = self.on_settled;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // Component may be gone by now; a newer keystroke supersedes this ticket
            if let Some(value) = debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
                on_settled.run(value);
            }
        });
    }

    /// Drop a pending value (e.g. the field was cleared programmatically)
    pub fn cancel(&self) {
        self.debouncer.update_value(|d| d.cancel());
    }

    /// Skip the wait: drop anything pending and settle on `value` now
    pub fn submit(&self, value: String) {
        self.cancel();
        self.on_settled.run(value);
    }
}

pub fn use_debounced(
    delay: Duration,
    on_settled: impl Fn(String) + Send + Sync + 'static,
) -> DebouncedInput {
    DebouncedInput {
        debouncer: StoredValue::new(Debouncer::new(delay)),
        on_settled: Callback::new(on_settled),
    }
}

// ========================
// Listing
// ========================

/// Listing state plus the operations that issue fetches
#[derive(Clone, Copy)]
pub struct ListingHandle {
    pub state: RwSignal<Listing>,
}

impl ListingHandle {
    /// New filters: clears the list and fetches page one
    pub fn set_filters(&self, filters: FilterSet) {
        let mut request = None;
        self.state.update(|l| request = l.change_filters(filters));
        if let Some(request) = request {
            run_fetch(self.state, request);
        }
    }

    /// Apply an edit to the current filters
    pub fn edit_filters(&self, edit: impl FnOnce(FilterSet) -> FilterSet) {
        let current = self.state.with_untracked(|l| l.filters().clone());
        self.set_filters(edit(current));
    }

    pub fn load_more(&self) {
        let mut request = None;
        self.state.update(|l| request = l.load_more());
        if let Some(request) = request {
            run_fetch(self.state, request);
        }
    }

    /// After an error: re-request the failed page, keeping what has loaded
    pub fn retry(&self) {
        let mut request = None;
        self.state.update(|l| request = l.retry());
        if let Some(request) = request {
            run_fetch(self.state, request);
        }
    }

    pub fn reset(&self, keep_category: bool) {
        let mut request = None;
        self.state.update(|l| request = l.reset(keep_category));
        if let Some(request) = request {
            run_fetch(self.state, request);
        }
    }

    pub fn refresh(&self) {
        let mut request = None;
        self.state.update(|l| request = Some(l.refresh()));
        if let Some(request) = request {
            run_fetch(self.state, request);
        }
    }
}

/// Create a listing for `filters` and fetch its first page
pub fn use_listing(config: ListingConfig, filters: FilterSet) -> ListingHandle {
    let handle = ListingHandle {
        state: RwSignal::new(Listing::with_filters(config, filters)),
    };
    handle.refresh();
    handle
}

fn run_fetch(state: RwSignal<Listing>, request: FetchRequest) {
    let FetchRequest { tag, query } = request;
    spawn_local(async move {
        let result = commands::list_products(&query).await;
        // try_update: the page may have been left while the request was in flight
        let applied = state.try_update(|l| match result {
            Ok(page) => l.apply(tag, page),
            Err(message) => {
                log::error!("Loading {} failed: {}", query.to_path(), message);
                l.fail(tag, message)
            }
        });
        if applied == Some(false) {
            log::debug!("Discarded stale response for {}", query.to_path());
        }
    });
}

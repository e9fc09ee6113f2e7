//! Application Context
//!
//! Navigation and configuration shared via Leptos Context API.

use catalog_core::CatalogConfig;
use leptos::prelude::*;

/// Screens of the app; navigation is in-memory (no URL router)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Inventory,
    Categories,
    Category(String),
    Product(u32),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
    /// Previously visited screens, for "Back"
    history: StoredValue<Vec<Route>>,
    config: StoredValue<CatalogConfig>,
}

impl AppContext {
    pub fn new(config: CatalogConfig) -> Self {
        let (route, set_route) = signal(Route::Home);
        Self {
            route,
            set_route,
            history: StoredValue::new(Vec::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> CatalogConfig {
        self.config.get_value()
    }

    /// Go to a screen, remembering the current one
    pub fn navigate(&self, route: Route) {
        let current = self.route.get_untracked();
        if current == route {
            return;
        }
        log::debug!("Navigate {:?} -> {:?}", current, route);
        self.history.update_value(|h| h.push(current));
        self.set_route.set(route);
        scroll_to_top();
    }

    /// Return to the previous screen (Home when there is none)
    pub fn back(&self) {
        let mut previous = None;
        self.history.update_value(|h| previous = h.pop());
        self.set_route.set(previous.unwrap_or(Route::Home));
        scroll_to_top();
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

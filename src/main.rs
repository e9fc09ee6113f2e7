//! Catalog Viewer Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod hooks;
mod logging;
mod pages;
mod store;

use app::App;
use catalog_core::CatalogConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => CatalogConfig::default(),
    };

    logging::init(config.level_filter());
    match loaded {
        Ok(Some(_)) => info!("Using window.__CATALOG_CONFIG__ (api: {})", config.base_url),
        Ok(None) => info!("Using default config (api: {})", config.base_url),
        Err(e) => warn!("Ignoring invalid window.__CATALOG_CONFIG__: {}", e),
    }

    commands::init(&config);
    mount_to_body(move || view! { <App config=config /> });
}

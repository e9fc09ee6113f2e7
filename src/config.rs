//! Runtime Configuration
//!
//! The host page may define `window.__CATALOG_CONFIG__` (any subset of
//! `CatalogConfig` fields, camelCase) before the wasm module starts.

use catalog_core::CatalogConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__CATALOG_CONFIG__";

/// `Ok(None)` when the page defines no config object
pub fn load() -> Result<Option<CatalogConfig>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    serde_wasm_bindgen::from_value::<CatalogConfig>(value)
        .map(|config| Some(config.normalized()))
        .map_err(|e| e.to_string())
}

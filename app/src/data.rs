//! Page-supplied data: `window.CHARACTERS`, `window.VILLAINS`, `data-page`.

use dossier_core::Catalog;
use serde_json::Value;
use wasm_bindgen::JsValue;

/// Read a global from `window` as JSON. Missing or unconvertible values are `None`.
fn window_global(name: &str) -> Option<Value> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        tracing::debug!(name, "page global not defined");
        return None;
    }
    match serde_wasm_bindgen::from_value::<Value>(value) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!(name, error = %err, "page global is not plain data");
            None
        }
    }
}

/// Both data sets. Anything but an array becomes an empty set.
pub fn load_catalog() -> Catalog {
    let characters = window_global("CHARACTERS");
    let villains = window_global("VILLAINS");
    let catalog = Catalog::from_values(characters.as_ref(), villains.as_ref());
    tracing::info!(
        characters = catalog.characters.len(),
        villains = catalog.villains.len(),
        "catalog loaded from page"
    );
    catalog
}

/// Raw `data-page` value of the body; empty when absent
pub fn current_page_attr() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(dossier_core::shell::attrs::PAGE))
        .unwrap_or_default()
}

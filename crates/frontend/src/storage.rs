//! `localStorage` access

use folio_core::{Error, KeyValueStore, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`KeyValueStore`] over the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| Error::storage("localStorage is not available"))
}

fn js_error(err: JsValue) -> Error {
    Error::storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}

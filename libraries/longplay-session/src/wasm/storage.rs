//! `localStorage` adapter

use longplay_core::{KeyValueStore, LongplayError, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// [`KeyValueStore`] backed by the window's `localStorage`
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the current window's `localStorage`
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| LongplayError::storage("no window available"))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| LongplayError::storage("localStorage is disabled"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> LongplayError {
    LongplayError::storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

use gloo_storage::{LocalStorage, Storage};

use super::{DbError, PreferenceStore};

/// `localStorage`-backed preferences. Values are stored raw, not JSON encoded.
#[derive(Clone, Copy, Default)]
pub struct BrowserPreferences;

fn describe(err: wasm_bindgen::JsValue) -> DbError {
    DbError::Unavailable(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl PreferenceStore for BrowserPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        LocalStorage::raw().get_item(key).map_err(describe)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        LocalStorage::raw().set_item(key, value).map_err(describe)
    }
}

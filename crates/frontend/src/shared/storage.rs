//! Key/value persistence used by view state.
//!
//! Components never reach for `window.localStorage` directly; they receive a
//! [`SharedStore`] so tests can swap in [`MemoryStore`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use web_sys::window;

/// Synchronous string key/value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Browser `localStorage`.
///
/// Holds no handle: `web_sys::Storage` is not `Send`, so it is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStore for BrowserLocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("failed to write '{}' to local storage", key);
                }
            }
            None => log::warn!("local storage unavailable, '{}' not saved", key),
        }
    }
}

/// In-memory storage for tests and non-browser hosts
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (key, value) in items {
            store.set(&key.into(), &value.into());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }
}

/// Reads a JSON-encoded value.
///
/// Bare strings written by older code (`discussions` instead of `"discussions"`)
/// are accepted too. Anything else reads as not set.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str::<Option<T>>(&raw) {
        Ok(value) => value,
        Err(_) => serde_json::from_value(serde_json::Value::String(raw)).ok(),
    }
}

pub fn set_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        log::warn!("failed to encode value for '{}'", key);
        return;
    };
    store.set(key, &raw);
}

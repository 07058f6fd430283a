//! `localStorage`-backed preference store implementation.
//!
//! Synchronous at the browser API boundary while also implementing the async
//! [`platform_host::PrefsStore`] contract used by the desktop runtime.

use platform_host::{PrefsStore, PrefsStoreFuture};
use serde::{de::DeserializeOwned, Serialize};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    /// Loads a raw JSON string for a preference key.
    pub fn load_json(self, key: &str) -> Option<String> {
        bridge::local_storage_get(key)
    }

    /// Saves a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails (quota exceeded is
    /// the usual cause once camera photos accumulate).
    pub fn save_json(self, key: &str, raw_json: &str) -> Result<(), String> {
        bridge::local_storage_set(key, raw_json)
    }

    /// Deletes a preference key from localStorage.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete fails.
    pub fn delete_json(self, key: &str) -> Result<(), String> {
        bridge::local_storage_remove(key)
    }

    /// Loads and deserializes a typed preference value, treating corrupt values as absent.
    pub fn load_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
        let raw = self.load_json(key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Serializes and saves a typed preference value.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or localStorage write fails.
    pub fn save_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), String> {
        let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
        self.save_json(key, &raw)
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load_json(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save_json(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete_json(key) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fallback_reads_nothing_and_accepts_writes() {
        let store = WebPrefsStore;
        assert_eq!(store.load_json("theme"), None);
        assert!(store.save_typed("theme", &"light").is_ok());
        assert_eq!(store.load_typed::<String>("theme"), None);
        assert_eq!(block_on(store.load_pref("theme")).expect("load"), None);
    }
}

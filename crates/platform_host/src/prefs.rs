//! Key/value preference storage contracts and in-process adapters.
//!
//! Preferences (theme, wallpaper selection, custom wallpapers, camera photos) are stored as JSON
//! text per key. There is no schema versioning: a value that no longer deserializes is treated
//! as an error by the typed helpers and callers fall back to defaults.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a preference key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Deletes a preference key.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string. Clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw stored JSON for `key` without going through the async contract.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` when nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| format!("pref `{key}`: {e}"))?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| format!("pref `{key}`: {e}"))?;
    store.save_pref(key, &raw).await
}

/// Removes a preference key through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store delete fails.
pub async fn delete_pref_with<S: PrefsStore + ?Sized>(store: &S, key: &str) -> Result<(), String> {
    store.delete_pref(key).await
}

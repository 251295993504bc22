//! Key-value store abstraction.
//!
//! Keys name whole documents (`weldifyJobs`, `weldifySafetyChecklist`, ...);
//! values are opaque strings, JSON in practice.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StorageError, StorageErrorKind};

/// String key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid or the backend fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Check that `key` is non-empty and limited to ASCII alphanumerics, `-`
/// and `_`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::new(StorageErrorKind::InvalidKey).with_path(key))
    }
}

/// Read and decode a JSON value.
///
/// # Errors
///
/// Returns [`StorageErrorKind::Corrupt`] if the stored text is not valid JSON
/// for `T`, or any error from the store.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(|e| {
        tracing::warn!(key, error = %e, "stored value is not valid JSON");
        StorageError::new(StorageErrorKind::Corrupt)
            .with_source(e)
            .with_path(key)
    })
}

/// Encode a value as JSON and store it.
///
/// # Errors
///
/// Returns any error from the store, or [`StorageErrorKind::Other`] if the
/// value cannot be serialized.
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| {
        StorageError::new(StorageErrorKind::Other)
            .with_source(e)
            .with_path(key)
    })?;
    store.set(key, &raw)
}

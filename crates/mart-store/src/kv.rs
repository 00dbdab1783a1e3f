//! Key-value store trait with automatic JSON serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// A durable key-value store.
///
/// Backends implement the raw byte operations; typed access goes through
/// the provided [`get`](KvStore::get) and [`set`](KvStore::set) methods,
/// which serialize values as JSON.
pub trait KvStore {
    /// Get the raw bytes stored under a key, or `None` if absent.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store raw bytes under a key, replacing any previous value.
    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Delete the value stored under a key. Deleting an absent key is not
    /// an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Check whether a key is present.
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// List every key in the store.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Get a typed value.
    ///
    /// Returns `None` if the key is absent; deserialization failures
    /// surface as [`StoreError::Serialize`].
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get_bytes(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Store a typed value as JSON.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.set_bytes(key, &bytes)
    }
}

impl<S: KvStore> KvStore for &S {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_bytes(key)
    }

    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).set_bytes(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}

/// Build a namespaced store key from a prefix and one or more parts.
///
/// # Example
///
/// ```
/// let key = mart_store::store_key!("quickmart", "cart");
/// assert_eq!(key, "quickmart:cart");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr $(, $part:expr)+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

//! File-backed store backend.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{KvStore, StoreError};

/// A durable store backed by a single JSON document on disk.
///
/// The document maps keys to their serialized JSON text, so the file stays
/// human-readable. Every write goes straight through to disk; a missing
/// file reads as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open a store at the given path, creating parent directories as
    /// needed. The file itself is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Open(format!("{}: {}", parent.display(), e)))?;
            }
        }
        Ok(Self { path })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<HashMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&self, document: &HashMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let document = self.read_document()?;
        Ok(document.get(key).map(|value| value.clone().into_bytes()))
    }

    fn set_bytes(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let text = String::from_utf8(value.to_vec())
            .map_err(|_| StoreError::NonTextValue(key.to_string()))?;
        let mut document = self.read_document()?;
        document.insert(key.to_string(), text);
        self.write_document(&document)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut document = self.read_document()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.read_document()?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_document()?.keys().cloned().collect())
    }
}

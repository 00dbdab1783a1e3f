//! Durable key-value storage for QuickMart.
//!
//! Provides a small, ergonomic API for persisting application state under
//! namespaced string keys with automatic JSON serialization.
//!
//! # Example
//!
//! ```
//! use mart_store::{KvStore, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Settings {
//!     page_size: i64,
//! }
//!
//! let store = MemoryStore::new();
//! store.set("quickmart:settings", &Settings { page_size: 12 }).unwrap();
//!
//! let loaded: Option<Settings> = store.get("quickmart:settings").unwrap();
//! assert_eq!(loaded, Some(Settings { page_size: 12 }));
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KvStore, MemoryStore, StoreError};
}

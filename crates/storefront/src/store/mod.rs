//! Persistent key-value storage.
//!
//! The cart survives restarts through a small asynchronous string store:
//! `get` returns the stored value for a key (or `None` if the key was
//! never written), `set` fully replaces it. [`FileStore`] is the
//! production backend (one file per key in the configured data
//! directory); [`MemoryStore`] backs tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the key-value store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed.
    #[error("store read failed for key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a key failed.
    #[error("store write failed for key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Asynchronous string key-value store surviving process restarts.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, fully replacing any prior value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

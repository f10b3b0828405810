//! Durable key-value persistence for lineups.
//!
//! A store maps string keys to serialized values. Two backends ship here:
//! [`MemoryStore`] for tests and embedding, and [`FileStore`] which keeps one
//! file per key in a directory and writes atomically.

pub mod file;
pub mod key;
pub mod memory;

pub use file::FileStore;
pub use key::{RosterId, StorageKey, DEFAULT_KEY_PREFIX};
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Synchronous string key-value store.
///
/// `get` on a missing key is `Ok(None)`, never an error. `remove` on a missing
/// key succeeds.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

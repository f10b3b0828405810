use std::fs::{self, remove_file};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::key::is_valid_key;
use super::KeyValueStore;
use crate::error::StoreError;

const ENTRY_EXTENSION: &str = "json";

/// Directory-backed store: one `<key>.json` file per entry.
///
/// Each write goes to its own uniquely named temp file in the store directory,
/// which is synced and then renamed over the entry. Readers see either the old
/// or a new value, and concurrent writers to one key settle on last-write-wins.
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_key(key) {
            return Err(StoreError::InvalidKey { key: key.to_string() });
        }
        Ok(self.root.join(format!("{}.{}", key, ENTRY_EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                log::trace!("Read {} bytes from {:?}", contents.len(), path);
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.root)?;

        let mut temp = NamedTempFile::new_in(&self.root)?;
        temp.write_all(value.as_bytes())?;
        temp.flush()?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        log::debug!("Stored {} bytes at {:?}", value.len(), path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        match remove_file(&path) {
            Ok(()) => {
                log::debug!("Removed {:?}", path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

//! JSON file backed key-value store

use crate::error::{Result, StorageError};
use crate::memory::MemoryStore;
use longplay_core::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key-value store persisted as one JSON object
///
/// The whole map is loaded on open and rewritten after every change. Writes
/// go to a sibling temp file that is then renamed over the store, so a crash
/// mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cache: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store; it is created on the first write.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON object
    /// of string values
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str::<BTreeMap<String, String>>(&contents)
                .map_err(|e| StorageError::corrupt(&path, e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {:?} not found, starting empty", path);
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Opened store {:?} with {} keys", path, entries.len());

        Ok(Self {
            path,
            cache: MemoryStore::from_entries(entries),
        })
    }

    /// Location of the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cache.iter()
    }

    /// Write `entries` to disk, then make them the cached state
    ///
    /// On failure the cache keeps its previous contents.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Flushed {} keys to {:?}", entries.len(), self.path);
        self.cache = MemoryStore::from_entries(entries);
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> longplay_core::Result<Option<String>> {
        self.cache.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> longplay_core::Result<()> {
        let mut entries = self.cache.entries().clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> longplay_core::Result<()> {
        let mut entries = self.cache.entries().clone();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.commit(entries)?;
        Ok(())
    }
}

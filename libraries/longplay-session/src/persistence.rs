//! Session state persistence
//!
//! Reads are forgiving: missing or corrupt entries load as empty state and
//! are logged. Writes propagate errors.

use crate::bookmarks::BookmarkList;
use crate::error::Result;
use longplay_core::{FileInfo, KeyValueStore};
use longplay_storage::keys;
use tracing::{debug, warn};

/// Typed view over a [`KeyValueStore`] using the shared key schema
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    inner: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Bookmarks saved for `file` (empty when none or unreadable)
    pub fn load_bookmarks(&self, file: &FileInfo) -> BookmarkList {
        let key = keys::bookmarks(file);
        let Some(raw) = self.read(&key) else {
            return BookmarkList::new();
        };

        match serde_json::from_str(&raw) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding corrupt bookmarks");
                BookmarkList::new()
            }
        }
    }

    /// Persist the bookmarks of `file`
    pub fn save_bookmarks(&mut self, file: &FileInfo, bookmarks: &BookmarkList) -> Result<()> {
        let json = serde_json::to_string(bookmarks)?;
        self.inner.set(&keys::bookmarks(file), &json)?;
        debug!(file = %file.name, count = bookmarks.len(), "Saved bookmarks");
        Ok(())
    }

    /// Last played position of `file` in seconds (0 when none or unreadable)
    pub fn load_last_played(&self, file: &FileInfo) -> f64 {
        let key = keys::last_played_time(file);
        let Some(raw) = self.read(&key) else {
            return 0.0;
        };

        match raw.trim().parse::<f64>() {
            Ok(time) if time.is_finite() && time >= 0.0 => time,
            Ok(time) => {
                warn!(key = %key, time, "Ignoring out-of-range last played time");
                0.0
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring unparsable last played time");
                0.0
            }
        }
    }

    /// Persist the last played position of `file`
    ///
    /// Non-finite or negative times are not written.
    pub fn save_last_played(&mut self, file: &FileInfo, time: f64) -> Result<()> {
        if !time.is_finite() || time < 0.0 {
            return Ok(());
        }
        self.inner
            .set(&keys::last_played_time(file), &time.to_string())?;
        Ok(())
    }

    /// Identity of the file the user last opened
    pub fn load_last_file(&self) -> Option<FileInfo> {
        let raw = self.read(keys::LAST_FILE_INFO)?;
        match serde_json::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(error = %e, "Discarding corrupt last file info");
                None
            }
        }
    }

    /// Remember `file` as the last opened file
    pub fn save_last_file(&mut self, file: &FileInfo) -> Result<()> {
        let json = serde_json::to_string(file)?;
        self.inner.set(keys::LAST_FILE_INFO, &json)?;
        Ok(())
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.inner.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read from store");
                None
            }
        }
    }
}

//! Longplay Storage
//!
//! Implementations of the [`KeyValueStore`] trait for hosts without a
//! browser `localStorage`, plus the key schema every host shares.
//!
//! - [`MemoryStore`]: in-process map, used by tests and ephemeral sessions
//! - [`JsonFileStore`]: a single JSON object on disk, written through on every change
//! - [`keys`]: per-file keys for bookmarks and last played time
//!
//! # Example
//!
//! ```rust
//! use longplay_core::{FileInfo, KeyValueStore};
//! use longplay_storage::{keys, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! let file = FileInfo::new("lecture.mp3", 2048);
//!
//! store.set(&keys::last_played_time(&file), "93.5").unwrap();
//! assert_eq!(
//!     store.get("lastPlayedTime_lecture.mp3_2048").unwrap().as_deref(),
//!     Some("93.5")
//! );
//! ```

#![forbid(unsafe_code)]

mod error;
mod file;
pub mod keys;
mod memory;

pub use error::{Result, StorageError};
pub use file::JsonFileStore;
pub use longplay_core::KeyValueStore;
pub use memory::MemoryStore;

//! Longplay player session
//!
//! Ties the progress track to a host audio element and a key-value store:
//! - Play/pause and file switching
//! - Per-file bookmarks and resume position, persisted under shared keys
//! - Click-to-seek and hover previews on the track
//! - A render-ready [`Scene`](longplay_track::Scene) of the current state
//!
//! Hosts implement [`AudioElement`](longplay_core::AudioElement) and
//! [`KeyValueStore`](longplay_core::KeyValueStore). With the `wasm` feature the
//! crate also exports a browser binding.
//!
//! # Example
//!
//! ```rust,ignore
//! use longplay_session::{PlayerSession, SessionConfig};
//! use longplay_storage::MemoryStore;
//!
//! let mut session = PlayerSession::open(audio, MemoryStore::new(), SessionConfig::default())?;
//! session.on_metadata_loaded();
//! session.click(Point::new(80.0, 20.0))?;
//! ```

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod persistence;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bookmarks::BookmarkList;
pub use config::{SessionConfig, DEFAULT_SOURCE};
pub use error::{Result, SessionError};
pub use persistence::SessionStore;
pub use session::{PlayerSession, SeekOutcome};

#[cfg(feature = "wasm")]
pub use wasm::WasmPlayer;

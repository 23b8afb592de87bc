//! Collaborator traits
//!
//! The player logic never talks to a browser or an audio device directly.
//! Hosts provide these traits: an `<audio>` element and `localStorage` in the
//! browser, in-memory or file-backed implementations natively and in tests.

use crate::error::Result;

/// Host audio element
///
/// Mirrors the subset of the HTML media element the player relies on. Times
/// are floating-point seconds.
pub trait AudioElement {
    /// Replace the media source and start loading it
    fn set_source(&mut self, source: &str) -> Result<()>;

    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the host rejects playback (autoplay policy, no source)
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead to `time` seconds
    fn seek(&mut self, time: f64) -> Result<()>;

    /// Current playhead position in seconds
    fn current_time(&self) -> f64;

    /// Total duration in seconds
    ///
    /// May be `0.0` or NaN before metadata has loaded.
    fn duration(&self) -> f64;
}

/// String key-value store
///
/// Modeled on the browser's `localStorage`: flat string keys, string values.
pub trait KeyValueStore {
    /// Read a value
    ///
    /// Returns `Ok(None)` if the key is not present
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    /// Returns an error if the value could not be persisted (quota, I/O)
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value (no-op when absent)
    fn remove(&mut self, key: &str) -> Result<()>;
}

//! Longplay command-line driver
//!
//! Renders the progress track, resolves pointer positions and manages
//! bookmarks in a JSON store shared with the browser key schema.

pub mod audio;
pub mod commands;
pub mod config;

pub use audio::NullAudio;
pub use config::CliConfig;

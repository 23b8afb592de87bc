//! WASM bindings for longplay-session
//!
//! Runs the player session in the browser on top of an `<audio>` element and
//! `localStorage`.

pub mod audio;
pub mod player;
pub mod storage;
pub mod types;

pub use audio::MediaElementAudio;
pub use player::{default_waypoints, point_at_progress, resolve_point, WasmPlayer};
pub use storage::LocalStorage;
pub use types::WasmSeekOutcome;

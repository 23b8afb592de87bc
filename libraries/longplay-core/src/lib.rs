//! Longplay Core
//!
//! Platform-agnostic core types, traits, and error handling for Longplay.
//!
//! This crate provides the foundational building blocks shared by the track
//! geometry, storage and session crates, and by the browser and native hosts.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Point`, `Bookmark`, `FileInfo`
//! - **Core Traits**: `AudioElement`, `KeyValueStore`
//! - **Error Handling**: Unified `LongplayError` and `Result` types
//! - **Time Formatting**: `format_time` for labels and default bookmark names
//!
//! # Example
//!
//! ```rust
//! use longplay_core::{format_time, Bookmark, FileInfo, Point};
//!
//! let file = FileInfo::new("lecture.mp3", 4_194_304);
//! assert_eq!(file.storage_suffix(), "lecture.mp3_4194304");
//!
//! let bookmark = Bookmark::at(83.4);
//! assert_eq!(bookmark.name, "bookmarks_01:23");
//!
//! let midpoint = Point::new(20.0, 20.0).lerp(Point::new(140.0, 20.0), 0.5);
//! assert_eq!(midpoint, Point::new(80.0, 20.0));
//! assert_eq!(format_time(3725.0), "1:02:05");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod time;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{LongplayError, Result};
pub use time::format_time;
pub use traits::{AudioElement, KeyValueStore};
pub use types::{Bookmark, FileInfo, Point};

//! Domain types shared across Longplay crates

mod bookmark;
mod file_info;
mod point;

pub use bookmark::Bookmark;
pub use file_info::{FileInfo, DEFAULT_FILE_NAME};
pub use point::Point;

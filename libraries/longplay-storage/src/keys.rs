//! Persisted key schema
//!
//! Keys are shared with the browser build, so data written by one host is
//! readable by the other. Per-file keys embed the file's storage suffix
//! (`{name}_{size}`).

use longplay_core::FileInfo;

/// Last file the user opened, as JSON `{"name": ..., "size": ...}`
pub const LAST_FILE_INFO: &str = "lastFileInfo";

const BOOKMARKS_PREFIX: &str = "bookmarks_";
const LAST_PLAYED_TIME_PREFIX: &str = "lastPlayedTime_";

/// Bookmarks of `file`, as a JSON array of `{"time": ..., "name": ...}`
pub fn bookmarks(file: &FileInfo) -> String {
    format!("{}{}", BOOKMARKS_PREFIX, file.storage_suffix())
}

/// Last played position of `file`, as decimal seconds
pub fn last_played_time(file: &FileInfo) -> String {
    format!("{}{}", LAST_PLAYED_TIME_PREFIX, file.storage_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_file_keys() {
        let file = FileInfo::new("audio.mp3", 0);
        assert_eq!(bookmarks(&file), "bookmarks_audio.mp3_0");
        assert_eq!(last_played_time(&file), "lastPlayedTime_audio.mp3_0");
    }

    #[test]
    fn same_name_different_size_is_a_different_file() {
        let a = FileInfo::new("episode.mp3", 100);
        let b = FileInfo::new("episode.mp3", 101);
        assert_ne!(bookmarks(&a), bookmarks(&b));
        assert_ne!(last_played_time(&a), last_played_time(&b));
    }
}

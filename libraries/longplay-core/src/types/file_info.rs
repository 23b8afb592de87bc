/// Identity of the currently loaded audio file
use serde::{Deserialize, Serialize};

/// Name of the bundled audio file loaded when nothing else was chosen
pub const DEFAULT_FILE_NAME: &str = "audio.mp3";

/// Audio file identity
///
/// Bookmarks and the last played position are stored per file. A file is
/// identified by its name and byte size, so re-selecting the same file on a
/// later visit restores its state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name as reported by the file picker
    pub name: String,

    /// File size in bytes (0 for the bundled default file)
    pub size: u64,
}

impl FileInfo {
    /// Create a file identity
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// The bundled default file
    pub fn bundled() -> Self {
        Self::new(DEFAULT_FILE_NAME, 0)
    }

    /// Whether this is the bundled default file
    pub fn is_bundled(&self) -> bool {
        self.name == DEFAULT_FILE_NAME && self.size == 0
    }

    /// `{name}_{size}` suffix used in persisted keys
    pub fn storage_suffix(&self) -> String {
        format!("{}_{}", self.name, self.size)
    }
}

impl Default for FileInfo {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_bundled_file() {
        let file = FileInfo::default();
        assert_eq!(file.name, "audio.mp3");
        assert_eq!(file.size, 0);
        assert!(file.is_bundled());
        assert!(!FileInfo::new("audio.mp3", 12).is_bundled());
    }

    #[test]
    fn storage_suffix_joins_name_and_size() {
        let file = FileInfo::new("talk_part_1.mp3", 1024);
        assert_eq!(file.storage_suffix(), "talk_part_1.mp3_1024");
    }

    #[test]
    fn json_shape() {
        let file = FileInfo::new("a.mp3", 7);
        let json = serde_json::to_string(&file).unwrap();
        assert_eq!(json, r#"{"name":"a.mp3","size":7}"#);
    }
}

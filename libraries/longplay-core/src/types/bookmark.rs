/// Named timestamp inside an audio file
use crate::time::format_time;
use serde::{Deserialize, Serialize};

/// Bookmark
///
/// Bookmarks are keyed by their exact timestamp: two bookmarks never share a
/// `time` within one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Position in seconds
    pub time: f64,

    /// Display name
    pub name: String,
}

impl Bookmark {
    /// Create a bookmark with an explicit name
    pub fn new(time: f64, name: impl Into<String>) -> Self {
        Self {
            time,
            name: name.into(),
        }
    }

    /// Create a bookmark named after its position (`bookmarks_MM:SS`)
    pub fn at(time: f64) -> Self {
        Self::new(time, format!("bookmarks_{}", format_time(time)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_uses_formatted_time() {
        assert_eq!(Bookmark::at(0.0).name, "bookmarks_00:00");
        assert_eq!(Bookmark::at(754.9).name, "bookmarks_12:34");
    }

    #[test]
    fn persisted_shape() {
        let json = serde_json::to_string(&vec![Bookmark::new(12.5, "Intro")]).unwrap();
        assert_eq!(json, r#"[{"time":12.5,"name":"Intro"}]"#);

        let parsed: Vec<Bookmark> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].time, 12.5);
        assert_eq!(parsed[0].name, "Intro");
    }
}

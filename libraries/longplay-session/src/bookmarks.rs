//! Bookmark collection for one audio file
//!
//! Bookmarks are kept in insertion order and keyed by exact timestamp.

use longplay_core::Bookmark;
use serde::{Deserialize, Serialize};

/// Ordered bookmarks of a single file
///
/// Serializes as a bare JSON array, which is the persisted format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkList {
    items: Vec<Bookmark>,
}

impl BookmarkList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bookmark
    ///
    /// Returns `false` (and keeps the list unchanged) if a bookmark already
    /// exists at exactly the same time.
    pub fn add(&mut self, bookmark: Bookmark) -> bool {
        if self.contains(bookmark.time) {
            return false;
        }
        self.items.push(bookmark);
        true
    }

    /// Rename the bookmark at `time`
    ///
    /// The name is trimmed; an empty name leaves the list unchanged. Returns
    /// whether anything was renamed.
    pub fn rename(&mut self, time: f64, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let mut renamed = false;
        for bookmark in self.items.iter_mut().filter(|b| b.time == time) {
            name.clone_into(&mut bookmark.name);
            renamed = true;
        }
        renamed
    }

    /// Remove every bookmark at `time`
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, time: f64) -> bool {
        let before = self.items.len();
        self.items.retain(|b| b.time != time);
        self.items.len() != before
    }

    /// Bookmark at exactly `time`
    pub fn get(&self, time: f64) -> Option<&Bookmark> {
        self.items.iter().find(|b| b.time == time)
    }

    /// Check if a bookmark exists at exactly `time`
    pub fn contains(&self, time: f64) -> bool {
        self.get(time).is_some()
    }

    /// Bookmark timestamps, in list order
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|b| b.time)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Bookmark] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Bookmark>> for BookmarkList {
    fn from(items: Vec<Bookmark>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a BookmarkList {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(times: &[f64]) -> BookmarkList {
        times.iter().map(|&t| Bookmark::at(t)).collect::<Vec<_>>().into()
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut bookmarks = BookmarkList::new();
        assert!(bookmarks.add(Bookmark::at(30.0)));
        assert!(bookmarks.add(Bookmark::at(10.0)));

        assert_eq!(bookmarks.times().collect::<Vec<_>>(), vec![30.0, 10.0]);
    }

    #[test]
    fn add_rejects_duplicate_time() {
        let mut bookmarks = list(&[12.5]);
        assert!(!bookmarks.add(Bookmark::new(12.5, "other")));
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks.get(12.5).unwrap().name, "bookmarks_00:12");
    }

    #[test]
    fn add_allows_nearby_times() {
        let mut bookmarks = list(&[12.5]);
        assert!(bookmarks.add(Bookmark::at(12.500_001)));
        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn rename_trims_name() {
        let mut bookmarks = list(&[5.0]);
        assert!(bookmarks.rename(5.0, "  Chorus \n"));
        assert_eq!(bookmarks.get(5.0).unwrap().name, "Chorus");
    }

    #[test]
    fn rename_ignores_blank_name() {
        let mut bookmarks = list(&[5.0]);
        assert!(!bookmarks.rename(5.0, "   "));
        assert!(!bookmarks.rename(5.0, ""));
        assert_eq!(bookmarks.get(5.0).unwrap().name, "bookmarks_00:05");
    }

    #[test]
    fn rename_unknown_time() {
        let mut bookmarks = list(&[5.0]);
        assert!(!bookmarks.rename(6.0, "Verse"));
    }

    #[test]
    fn remove_by_time() {
        let mut bookmarks = list(&[1.0, 2.0, 3.0]);
        assert!(bookmarks.remove(2.0));
        assert!(!bookmarks.remove(2.0));
        assert_eq!(bookmarks.times().collect::<Vec<_>>(), vec![1.0, 3.0]);
    }

    #[test]
    fn remove_clears_legacy_duplicates() {
        // Stores written by older builds may hold duplicates
        let mut bookmarks = BookmarkList::from(vec![
            Bookmark::new(4.0, "a"),
            Bookmark::new(4.0, "b"),
            Bookmark::new(8.0, "c"),
        ]);
        assert!(bookmarks.remove(4.0));
        assert_eq!(bookmarks.len(), 1);
    }

    #[test]
    fn persisted_format_is_bare_array() {
        let bookmarks = BookmarkList::from(vec![Bookmark::new(1.5, "Intro")]);
        let json = serde_json::to_string(&bookmarks).unwrap();
        assert_eq!(json, r#"[{"time":1.5,"name":"Intro"}]"#);

        let parsed: BookmarkList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bookmarks);
    }
}

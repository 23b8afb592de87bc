/// Command implementations
///
/// Each command returns its output instead of printing, so `main` owns
/// stdout.
use crate::audio::NullAudio;
use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use longplay_core::{format_time, Bookmark, FileInfo, Point};
use longplay_session::{BookmarkList, PlayerSession, SessionStore};
use longplay_storage::JsonFileStore;
use longplay_track::{render_svg, ProximityMatch, Viewport};
use std::fmt::Write;

/// Render the progress track of `file` (default: the last opened file) as SVG
///
/// Opening a file other than the bundled one records it as the last file.
pub fn render(
    config: &CliConfig,
    file: Option<FileInfo>,
    time: f64,
    duration: f64,
    hover: Option<Point>,
) -> Result<String> {
    let store = open_store(config)?;
    let mut session =
        PlayerSession::open(NullAudio::new(duration), store, config.session_config())?;

    let file = file.or_else(|| session.last_file()).unwrap_or_default();
    let source = file.name.clone();
    session.load_file(file, source)?;
    session.on_metadata_loaded();
    session.seek(time)?;

    if let Some(point) = hover {
        session.hover(point);
    }

    tracing::debug!(
        file = %session.file().name,
        bookmarks = session.bookmarks().len(),
        "Rendering track"
    );
    Ok(render_svg(
        session.layout(),
        &session.scene(),
        config.render.width,
        config.render.height,
    ))
}

/// Resolve a pointer position to a playback time
///
/// With `screen`, the position is in pixels of a `render.width` x
/// `render.height` drawing of the track.
pub fn resolve(config: &CliConfig, point: Point, duration: f64, screen: bool) -> Option<ProximityMatch> {
    let layout = config.layout();
    let point = if screen {
        Viewport::new(
            layout.view_box(),
            f64::from(config.render.width),
            f64::from(config.render.height),
        )
        .to_logical(point)
    } else {
        point
    };

    layout.resolve(point, duration, config.track.snap_distance)
}

/// Human-readable resolve result
pub fn describe_match(hit: Option<&ProximityMatch>) -> String {
    match hit {
        Some(hit) => format!(
            "{} ({:.3}s) at {:.2},{:.2} on segment {}, {:.2} from the pointer",
            format_time(hit.time),
            hit.time,
            hit.point.x,
            hit.point.y,
            hit.segment_index,
            hit.distance
        ),
        None => "no match".to_string(),
    }
}

/// Point `fraction` of the way along the track
pub fn point(config: &CliConfig, fraction: f64) -> Point {
    config.layout().point_at(fraction)
}

/// Bookmarks of `file` (default: the last opened file)
pub fn list_bookmarks(config: &CliConfig, file: Option<FileInfo>) -> Result<(FileInfo, BookmarkList)> {
    let store = SessionStore::new(open_store(config)?);
    let file = target_file(&store, file);
    let bookmarks = store.load_bookmarks(&file);
    Ok((file, bookmarks))
}

/// Add a bookmark at `time`
///
/// Returns `None` if a bookmark already exists at that time.
pub fn add_bookmark(
    config: &CliConfig,
    file: Option<FileInfo>,
    time: f64,
    name: Option<&str>,
) -> Result<Option<Bookmark>> {
    if !time.is_finite() || time < 0.0 {
        bail!("bookmark time must be a non-negative number of seconds, got {}", time);
    }

    let bookmark = match name.map(str::trim) {
        Some(name) if !name.is_empty() => Bookmark::new(time, name),
        _ => Bookmark::at(time),
    };

    edit_bookmarks(config, file, |bookmarks| {
        bookmarks.add(bookmark.clone()).then_some(bookmark)
    })
}

/// Rename the bookmark at `time`
pub fn rename_bookmark(
    config: &CliConfig,
    file: Option<FileInfo>,
    time: f64,
    name: &str,
) -> Result<bool> {
    edit_bookmarks(config, file, |bookmarks| bookmarks.rename(time, name))
}

/// Remove every bookmark at `time`
pub fn remove_bookmark(config: &CliConfig, file: Option<FileInfo>, time: f64) -> Result<bool> {
    edit_bookmarks(config, file, |bookmarks| bookmarks.remove(time))
}

/// One line per bookmark: position, exact seconds, name
pub fn format_bookmarks(file: &FileInfo, bookmarks: &BookmarkList) -> String {
    if bookmarks.is_empty() {
        return format!("No bookmarks for {} ({} bytes)\n", file.name, file.size);
    }

    let mut out = String::new();
    for bookmark in bookmarks {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>8}  {:>10.3}s  {}",
            format_time(bookmark.time),
            bookmark.time,
            bookmark.name
        );
    }
    out
}

/// Parse `X,Y`
pub fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {:?}", value))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid X: {}", e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid Y: {}", e))?;
    Ok(Point::new(x, y))
}

fn open_store(config: &CliConfig) -> Result<JsonFileStore> {
    JsonFileStore::open(&config.store_path)
        .with_context(|| format!("Failed to open store {}", config.store_path.display()))
}

fn target_file<S: longplay_core::KeyValueStore>(
    store: &SessionStore<S>,
    file: Option<FileInfo>,
) -> FileInfo {
    file.or_else(|| store.load_last_file()).unwrap_or_default()
}

fn edit_bookmarks<T, F>(config: &CliConfig, file: Option<FileInfo>, edit: F) -> Result<T>
where
    F: FnOnce(&mut BookmarkList) -> T,
    T: Changed,
{
    let mut store = SessionStore::new(open_store(config)?);
    let file = target_file(&store, file);

    let mut bookmarks = store.load_bookmarks(&file);
    let result = edit(&mut bookmarks);
    if result.changed() {
        store.save_bookmarks(&file, &bookmarks)?;
        tracing::info!(file = %file.name, count = bookmarks.len(), "Updated bookmarks");
    }
    Ok(result)
}

/// Whether a bookmark edit modified the list
trait Changed {
    fn changed(&self) -> bool;
}

impl Changed for bool {
    fn changed(&self) -> bool {
        *self
    }
}

impl<T> Changed for Option<T> {
    fn changed(&self) -> bool {
        self.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_spaces() {
        assert_eq!(parse_point("10, -2.5").unwrap(), Point::new(10.0, -2.5));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("1,").is_err());
    }

    #[test]
    fn describe_no_match() {
        assert_eq!(describe_match(None), "no match");
    }

    #[test]
    fn point_on_default_track() {
        let config = CliConfig::default();
        assert_eq!(point(&config, 0.0), Point::new(20.0, 20.0));
        assert_eq!(point(&config, 1.0), Point::new(140.0, 220.0));
    }

    #[test]
    fn empty_bookmark_listing() {
        let text = format_bookmarks(&FileInfo::bundled(), &BookmarkList::new());
        assert_eq!(text, "No bookmarks for audio.mp3 (0 bytes)\n");
    }
}

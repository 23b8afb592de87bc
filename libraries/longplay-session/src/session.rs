//! Player session
//!
//! Owns the playback state of the one open file and keeps the audio element,
//! the persisted state and the progress track in sync.

use crate::bookmarks::BookmarkList;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::persistence::SessionStore;
use longplay_core::{AudioElement, Bookmark, FileInfo, KeyValueStore, Point};
use longplay_track::{HoverLabel, Scene, TrackLayout, Viewport};
use tracing::{debug, info};

/// Result of clicking the progress track
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekOutcome {
    /// Playback moved to `time`
    Seeked {
        /// New position in seconds
        time: f64,
        /// Nearest point on the track
        point: Point,
    },

    /// The click was on the track, but there was nothing to seek to
    /// (no duration yet, or the very start of the track)
    Ignored {
        /// Time the click resolved to
        time: f64,
    },

    /// The click was too far from the track
    OutsideTrack,
}

impl SeekOutcome {
    /// Check if playback moved
    pub fn is_seek(&self) -> bool {
        matches!(self, Self::Seeked { .. })
    }
}

/// Player session over a host audio element and key-value store
pub struct PlayerSession<A, S> {
    audio: A,
    store: SessionStore<S>,
    config: SessionConfig,
    file: FileInfo,
    source: String,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    bookmarks: BookmarkList,
    hover: Option<HoverLabel>,
}

impl<A: AudioElement, S: KeyValueStore> PlayerSession<A, S> {
    /// Open a session on the bundled default file
    ///
    /// Restores the default file's bookmarks and seeks to its last played
    /// position.
    pub fn open(audio: A, store: S, config: SessionConfig) -> Result<Self> {
        config.validate()?;

        let source = config.default_source.clone();
        let mut session = Self {
            audio,
            store: SessionStore::new(store),
            config,
            file: FileInfo::bundled(),
            source,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            bookmarks: BookmarkList::new(),
            hover: None,
        };

        session.audio.set_source(&session.source)?;
        session.restore_file_state()?;

        info!(file = %session.file.name, "Session opened");
        Ok(session)
    }

    /// Switch to another file
    ///
    /// Returns `false` without touching anything if `file` is already the
    /// current file (same name and size).
    pub fn load_file(&mut self, file: FileInfo, source: impl Into<String>) -> Result<bool> {
        if file == self.file {
            debug!(file = %file.name, "File already loaded");
            return Ok(false);
        }

        self.pause();
        self.source = source.into();
        self.audio.set_source(&self.source)?;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.hover = None;

        self.store.save_last_file(&file)?;
        self.file = file;
        self.restore_file_state()?;

        info!(file = %self.file.name, size = self.file.size, "Loaded file");
        Ok(true)
    }

    /// Play if paused, pause if playing
    pub fn toggle_play(&mut self) -> Result<()> {
        if self.is_playing {
            self.pause();
        } else {
            self.audio.play()?;
            self.is_playing = true;
        }
        Ok(())
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.audio.pause();
        self.is_playing = false;
    }

    /// Playback position changed
    ///
    /// Reads the position from the audio element and persists it.
    pub fn on_time_update(&mut self) -> Result<()> {
        self.current_time = self.audio.current_time();
        self.store.save_last_played(&self.file, self.current_time)
    }

    /// Media metadata finished loading
    pub fn on_metadata_loaded(&mut self) {
        self.duration = self.audio.duration();
        debug!(duration = self.duration, "Metadata loaded");
    }

    /// Playback reached the end of the file
    pub fn on_ended(&mut self) {
        self.is_playing = false;
    }

    /// Bookmark the current position
    ///
    /// Returns the new bookmark, or `None` if no duration is known yet or a
    /// bookmark already exists at this exact time.
    pub fn add_bookmark(&mut self) -> Result<Option<Bookmark>> {
        if !self.has_duration() {
            return Ok(None);
        }

        let bookmark = Bookmark::at(self.audio.current_time());
        if !self.bookmarks.add(bookmark.clone()) {
            return Ok(None);
        }

        self.save_bookmarks()?;
        info!(time = bookmark.time, "Added bookmark");
        Ok(Some(bookmark))
    }

    /// Rename the bookmark at `time` (name is trimmed, blank names ignored)
    pub fn rename_bookmark(&mut self, time: f64, name: &str) -> Result<bool> {
        if !self.bookmarks.rename(time, name) {
            return Ok(false);
        }
        self.save_bookmarks()?;
        Ok(true)
    }

    /// Delete every bookmark at `time`
    pub fn remove_bookmark(&mut self, time: f64) -> Result<bool> {
        if !self.bookmarks.remove(time) {
            return Ok(false);
        }
        self.save_bookmarks()?;
        Ok(true)
    }

    /// Move playback to `time` seconds
    pub fn seek(&mut self, time: f64) -> Result<()> {
        self.audio.seek(time)?;
        self.current_time = time;
        Ok(())
    }

    /// Jump to a bookmark
    pub fn play_bookmark(&mut self, time: f64) -> Result<()> {
        self.seek(time)
    }

    /// Handle a click at `point` in track coordinates
    ///
    /// Seeks only when the click resolves to a finite time after the start
    /// of the file.
    pub fn click(&mut self, point: Point) -> Result<SeekOutcome> {
        let Some(hit) = self
            .config
            .layout
            .resolve(point, self.duration, self.config.snap_distance)
        else {
            return Ok(SeekOutcome::OutsideTrack);
        };

        if !self.has_duration() || !hit.time.is_finite() || hit.time <= 0.0 {
            return Ok(SeekOutcome::Ignored { time: hit.time });
        }

        self.seek(hit.time)?;
        debug!(time = hit.time, segment = hit.segment_index, "Seek from track click");

        Ok(SeekOutcome::Seeked {
            time: hit.time,
            point: hit.point,
        })
    }

    /// Handle a click at `screen` pixels, mapped through `viewport`
    pub fn click_screen(&mut self, viewport: &Viewport, screen: Point) -> Result<SeekOutcome> {
        self.click(viewport.to_logical(screen))
    }

    /// Pointer moved to `point` in track coordinates
    ///
    /// Shows a time label near the track, or clears it when the pointer is
    /// out of reach.
    pub fn hover(&mut self, point: Point) -> Option<&HoverLabel> {
        self.hover = if self.has_duration() {
            self.config
                .layout
                .resolve(point, self.duration, self.config.snap_distance)
                .map(|hit| HoverLabel::new(hit.time, hit.point))
        } else {
            None
        };
        self.hover.as_ref()
    }

    /// Pointer left the track
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Render model of the current state
    pub fn scene(&self) -> Scene {
        Scene::build(
            &self.config.layout,
            self.current_time,
            self.duration,
            self.bookmarks.times(),
            self.hover.clone(),
        )
    }

    /// File the user opened before, if any
    pub fn last_file(&self) -> Option<FileInfo> {
        self.store.load_last_file()
    }

    // ===== State Queries =====

    pub fn file(&self) -> &FileInfo {
        &self.file
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn bookmarks(&self) -> &BookmarkList {
        &self.bookmarks
    }

    pub fn hover_label(&self) -> Option<&HoverLabel> {
        self.hover.as_ref()
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.config.layout
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn store(&self) -> &S {
        self.store.inner()
    }

    /// Tear down the session, returning the host collaborators
    pub fn into_parts(self) -> (A, S) {
        (self.audio, self.store.into_inner())
    }

    fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    fn restore_file_state(&mut self) -> Result<()> {
        self.bookmarks = self.store.load_bookmarks(&self.file);

        let saved = self.store.load_last_played(&self.file);
        if saved > 0.0 {
            self.audio.seek(saved)?;
        }
        self.current_time = saved;

        debug!(
            file = %self.file.name,
            bookmarks = self.bookmarks.len(),
            position = saved,
            "Restored file state"
        );
        Ok(())
    }

    fn save_bookmarks(&mut self) -> Result<()> {
        self.store.save_bookmarks(&self.file, &self.bookmarks)
    }
}

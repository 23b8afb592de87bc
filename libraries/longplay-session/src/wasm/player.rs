//! WASM-compatible player wrapper

use super::audio::MediaElementAudio;
use super::storage::LocalStorage;
use super::types::WasmSeekOutcome;
use crate::{PlayerSession, SessionConfig, SessionError};
use js_sys::Function;
use longplay_core::{FileInfo, Point};
use longplay_track::{self as track, render_svg, TrackLayout, Viewport};
use wasm_bindgen::prelude::*;
use web_sys::HtmlMediaElement;

/// Browser player
///
/// Wraps [`PlayerSession`] with a JavaScript-friendly API. Pointer
/// coordinates are client pixels, mapped onto the track through the
/// rectangle set with `setViewport`.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: PlayerSession<MediaElementAudio, LocalStorage>,
    viewport: Viewport,

    on_change: Option<Function>,
    on_error: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player driving `audio`
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlMediaElement) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let store = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let inner = PlayerSession::open(
            MediaElementAudio::new(audio),
            store,
            SessionConfig::default(),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let view_box = inner.layout().view_box();
        Ok(Self {
            inner,
            viewport: Viewport::new(view_box, view_box.width, view_box.height),
            on_change: None,
            on_error: None,
        })
    }

    // ===== Playback Control =====

    /// Switch to a user-selected file
    ///
    /// Returns `false` if the file is already loaded.
    #[wasm_bindgen(js_name = loadFile)]
    pub fn load_file(&mut self, name: String, size: f64, source: String) -> Result<bool, JsValue> {
        let loaded = self
            .inner
            .load_file(FileInfo::new(name, size as u64), source)
            .map_err(|e| self.handle_error(e))?;
        if loaded {
            self.emit_change();
        }
        Ok(loaded)
    }

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) -> Result<(), JsValue> {
        self.inner.toggle_play().map_err(|e| self.handle_error(e))?;
        self.emit_change();
        Ok(())
    }

    pub fn pause(&mut self) {
        self.inner.pause();
        self.emit_change();
    }

    // ===== Media Events =====

    /// Forward the element's `timeupdate` event
    #[wasm_bindgen(js_name = onTimeUpdate)]
    pub fn on_time_update(&mut self) -> Result<(), JsValue> {
        self.inner
            .on_time_update()
            .map_err(|e| self.handle_error(e))?;
        self.emit_change();
        Ok(())
    }

    /// Forward the element's `loadedmetadata` event
    #[wasm_bindgen(js_name = onMetadataLoaded)]
    pub fn on_metadata_loaded(&mut self) {
        self.inner.on_metadata_loaded();
        self.emit_change();
    }

    /// Forward the element's `ended` event
    #[wasm_bindgen(js_name = onEnded)]
    pub fn on_ended(&mut self) {
        self.inner.on_ended();
        self.emit_change();
    }

    // ===== Bookmarks =====

    /// Bookmark the current position; returns the bookmark or `null`
    #[wasm_bindgen(js_name = addBookmark)]
    pub fn add_bookmark(&mut self) -> Result<JsValue, JsValue> {
        let bookmark = self
            .inner
            .add_bookmark()
            .map_err(|e| self.handle_error(e))?;
        self.emit_change();

        serde_wasm_bindgen::to_value(&bookmark)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = renameBookmark)]
    pub fn rename_bookmark(&mut self, time: f64, name: &str) -> Result<bool, JsValue> {
        let renamed = self
            .inner
            .rename_bookmark(time, name)
            .map_err(|e| self.handle_error(e))?;
        self.emit_change();
        Ok(renamed)
    }

    #[wasm_bindgen(js_name = removeBookmark)]
    pub fn remove_bookmark(&mut self, time: f64) -> Result<bool, JsValue> {
        let removed = self
            .inner
            .remove_bookmark(time)
            .map_err(|e| self.handle_error(e))?;
        self.emit_change();
        Ok(removed)
    }

    #[wasm_bindgen(js_name = playBookmark)]
    pub fn play_bookmark(&mut self, time: f64) -> Result<(), JsValue> {
        self.inner
            .play_bookmark(time)
            .map_err(|e| self.handle_error(e))?;
        self.emit_change();
        Ok(())
    }

    /// Get all bookmarks of the current file
    #[wasm_bindgen(js_name = getBookmarks)]
    pub fn get_bookmarks(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.bookmarks()).unwrap_or(JsValue::NULL)
    }

    // ===== Pointer =====

    /// Set the on-screen rectangle of the track (client pixels)
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.viewport = Viewport::new(self.inner.layout().view_box(), width, height)
            .with_origin(Point::new(left, top));
    }

    /// Click at client coordinates
    pub fn click(&mut self, client_x: f64, client_y: f64) -> Result<JsValue, JsValue> {
        let viewport = self.viewport;
        let outcome = self
            .inner
            .click_screen(&viewport, Point::new(client_x, client_y))
            .map_err(|e| self.handle_error(e))?;
        if outcome.is_seek() {
            self.emit_change();
        }

        serde_wasm_bindgen::to_value(&WasmSeekOutcome::from(outcome))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Pointer moved to client coordinates
    pub fn hover(&mut self, client_x: f64, client_y: f64) {
        let point = self.viewport.to_logical(Point::new(client_x, client_y));
        self.inner.hover(point);
        self.emit_change();
    }

    /// Pointer left the track
    pub fn leave(&mut self) {
        self.inner.leave();
        self.emit_change();
    }

    // ===== State Queries =====

    /// Render model of the current state
    #[wasm_bindgen(js_name = getScene)]
    pub fn get_scene(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.scene()).unwrap_or(JsValue::NULL)
    }

    /// Current state as an SVG document
    #[wasm_bindgen(js_name = renderSvg)]
    pub fn render_svg(&self, width: u32, height: u32) -> String {
        render_svg(self.inner.layout(), &self.inner.scene(), width, height)
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.is_playing()
    }

    #[wasm_bindgen(js_name = getCurrentTime)]
    pub fn get_current_time(&self) -> f64 {
        self.inner.current_time()
    }

    #[wasm_bindgen(js_name = getDuration)]
    pub fn get_duration(&self) -> f64 {
        self.inner.duration()
    }

    /// Current file as `{ name, size }`
    #[wasm_bindgen(js_name = getFile)]
    pub fn get_file(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.file()).unwrap_or(JsValue::NULL)
    }

    /// File opened in an earlier visit, or `null`
    #[wasm_bindgen(js_name = getLastFile)]
    pub fn get_last_file(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.last_file()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register a callback invoked whenever the state changes
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn emit_change(&self) {
        if let Some(ref cb) = self.on_change {
            cb.call0(&JsValue::NULL).ok();
        }
    }

    fn handle_error(&self, error: SessionError) -> JsValue {
        let err_msg = error.to_string();

        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &JsValue::from_str(&err_msg)).ok();
        }

        JsValue::from_str(&err_msg)
    }
}

/// Point at `fraction` along `waypoints` (`[{x, y}, ...]`)
#[wasm_bindgen(js_name = pointAtProgress)]
pub fn point_at_progress(waypoints: JsValue, fraction: f64) -> Result<JsValue, JsValue> {
    let waypoints = parse_waypoints(waypoints)?;
    serde_wasm_bindgen::to_value(&track::point_at_progress(&waypoints, fraction))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Nearest position on `waypoints` to `(x, y)`, or `null` beyond `max_snap_distance`
#[wasm_bindgen(js_name = resolvePoint)]
pub fn resolve_point(
    waypoints: JsValue,
    x: f64,
    y: f64,
    duration: f64,
    max_snap_distance: f64,
) -> Result<JsValue, JsValue> {
    let waypoints = parse_waypoints(waypoints)?;
    let hit = track::resolve(&waypoints, Point::new(x, y), duration, max_snap_distance);
    serde_wasm_bindgen::to_value(&hit)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Waypoints of the built-in serpentine track
#[wasm_bindgen(js_name = defaultWaypoints)]
pub fn default_waypoints() -> JsValue {
    serde_wasm_bindgen::to_value(TrackLayout::default().waypoints()).unwrap_or(JsValue::NULL)
}

fn parse_waypoints(value: JsValue) -> Result<Vec<Point>, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse waypoints: {}", e)))
}

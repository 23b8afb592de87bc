//! Progress scene and SVG output
//!
//! Turns playback state into what the host draws: the moving indicator, one
//! marker per bookmark, and an optional hover label. All positions come from
//! the forward mapping, so markers sit exactly where a click would seek.

use crate::layout::TrackLayout;
use crate::path::{position_at_progress, PathPosition};
use longplay_core::{format_time, Point};
use serde::{Deserialize, Serialize};

/// Offset of the hover label's text anchor from the hovered track point
pub const HOVER_LABEL_OFFSET: Point = Point::new(5.0, -5.0);

const TRACK_STROKE_WIDTH: u32 = 3;
const MARKER_RADIUS: u32 = 5;
const MARKER_FILL: &str = "lightcoral";
const INDICATOR_RADIUS: u32 = 6;
const INDICATOR_FILL: &str = "red";
const LABEL_FONT_SIZE: u32 = 12;

/// Playback progress as a fraction
///
/// `0.0` until a positive, finite duration is known.
pub fn progress_fraction(current_time: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 && current_time.is_finite() {
        current_time / duration
    } else {
        0.0
    }
}

/// Playback indicator position on `layout`
pub fn indicator(layout: &TrackLayout, current_time: f64, duration: f64) -> PathPosition {
    position_at_progress(layout.waypoints(), progress_fraction(current_time, duration))
}

/// Bookmark marker on the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Position of the bookmark in the caller's list
    pub index: usize,

    /// Bookmark time in seconds
    pub time: f64,

    /// Marker center
    pub point: Point,
}

/// Place bookmark markers
///
/// Nothing is placed without a positive, finite duration. Individual
/// bookmarks are skipped when their time is NaN, negative, or past the end of
/// the track; the remaining markers keep their original `index`.
pub fn bookmark_markers<I>(layout: &TrackLayout, times: I, duration: f64) -> Vec<Marker>
where
    I: IntoIterator<Item = f64>,
{
    if !duration.is_finite() || duration <= 0.0 {
        return Vec::new();
    }

    times
        .into_iter()
        .enumerate()
        .filter_map(|(index, time)| {
            if time.is_nan() || time < 0.0 {
                return None;
            }
            let fraction = time / duration;
            if !(0.0..=1.0).contains(&fraction) {
                return None;
            }
            Some(Marker {
                index,
                time,
                point: layout.point_at(fraction),
            })
        })
        .collect()
}

/// Time preview shown next to the pointer while hovering the track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverLabel {
    /// Time the pointer would seek to
    pub time: f64,

    /// Hovered point on the track
    pub point: Point,

    /// Text anchor
    pub anchor: Point,

    /// Formatted time
    pub text: String,
}

impl HoverLabel {
    /// Label for hovering `point`, which would seek to `time`
    pub fn new(time: f64, point: Point) -> Self {
        Self {
            time,
            point,
            anchor: point + HOVER_LABEL_OFFSET,
            text: format_time(time),
        }
    }
}

/// Everything needed to draw the progress track once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Playback indicator
    pub indicator: PathPosition,

    /// Bookmark markers
    pub markers: Vec<Marker>,

    /// Hover preview, if the pointer is over the track
    pub hover: Option<HoverLabel>,
}

impl Scene {
    /// Build a scene for the given playback state
    pub fn build<I>(
        layout: &TrackLayout,
        current_time: f64,
        duration: f64,
        bookmark_times: I,
        hover: Option<HoverLabel>,
    ) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            indicator: indicator(layout, current_time, duration),
            markers: bookmark_markers(layout, bookmark_times, duration),
            hover,
        }
    }
}

/// Render a scene as a standalone SVG document of `width` x `height` pixels
pub fn render_svg(layout: &TrackLayout, scene: &Scene, width: u32, height: u32) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{}">"#,
        width,
        height,
        layout.view_box().to_attribute()
    );
    svg.push('\n');

    svg.push_str(&format!(
        r#"  <path d="{}" stroke="black" fill="none" stroke-width="{}"/>"#,
        layout.svg_path_data(),
        TRACK_STROKE_WIDTH
    ));
    svg.push('\n');

    for marker in &scene.markers {
        svg.push_str(&format!(
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            marker.point.x, marker.point.y, MARKER_RADIUS, MARKER_FILL
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        scene.indicator.point.x, scene.indicator.point.y, INDICATOR_RADIUS, INDICATOR_FILL
    ));
    svg.push('\n');

    if let Some(label) = &scene.hover {
        svg.push_str(&format!(
            r#"  <text x="{}" y="{}" font-size="{}" fill="black">{}</text>"#,
            label.anchor.x, label.anchor.y, LABEL_FONT_SIZE, label.text
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

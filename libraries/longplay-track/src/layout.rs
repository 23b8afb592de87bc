//! Track layouts
//!
//! A layout is the waypoint list plus the logical canvas (SVG view box) it is
//! drawn in. Layouts are built once from static configuration and never
//! mutated.

use crate::path::PathModel;
use crate::proximity::ProximityMatch;
use longplay_core::Point;
use serde::{Deserialize, Serialize};

/// Left end of every serpentine row
pub const ROW_START_X: f64 = 20.0;

/// Right end of every serpentine row
pub const ROW_END_X: f64 = 140.0;

/// Vertical position of the first row
pub const FIRST_ROW_Y: f64 = 20.0;

/// Vertical distance between rows
pub const ROW_SPACING: f64 = 50.0;

/// Width of the default canvas
pub const CANVAS_WIDTH: f64 = 200.0;

/// Number of rows in the default serpentine track
pub const DEFAULT_ROWS: usize = 5;

/// Logical canvas of a track, as in SVG `viewBox="min_x min_y width height"`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// View box anchored at the origin
    pub const fn sized(width: f64, height: f64) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width,
            height,
        }
    }

    /// Whether the box has a positive, finite area
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Whether `point` lies inside the box (edges included)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.min_x + self.width
            && point.y >= self.min_y
            && point.y <= self.min_y + self.height
    }

    /// Value for the SVG `viewBox` attribute
    pub fn to_attribute(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Waypoints plus the canvas they are drawn in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    path: PathModel,
    view_box: ViewBox,
}

impl TrackLayout {
    /// Create a layout from arbitrary waypoints
    ///
    /// Fewer than two waypoints is accepted; mapping then falls back to the
    /// origin / no match. Check [`TrackLayout::is_degenerate`] when the
    /// waypoints come from user configuration.
    pub fn new(waypoints: impl Into<Vec<Point>>, view_box: ViewBox) -> Self {
        Self {
            path: PathModel::new(waypoints),
            view_box,
        }
    }

    /// Back-and-forth track with `rows` horizontal rows
    ///
    /// Even rows run left to right, odd rows right to left, joined by
    /// vertical connectors. Packs a long progress range into a compact area.
    /// `rows` below one is treated as one.
    pub fn serpentine(rows: usize) -> Self {
        let rows = rows.max(1);
        let waypoints: Vec<Point> = (0..rows)
            .flat_map(|row| {
                let y = FIRST_ROW_Y + ROW_SPACING * row as f64;
                if row % 2 == 0 {
                    [Point::new(ROW_START_X, y), Point::new(ROW_END_X, y)]
                } else {
                    [Point::new(ROW_END_X, y), Point::new(ROW_START_X, y)]
                }
            })
            .collect();

        Self::new(
            waypoints,
            ViewBox::sized(CANVAS_WIDTH, ROW_SPACING * rows as f64),
        )
    }

    /// Classic single-segment progress bar
    pub fn straight() -> Self {
        Self::new(
            vec![
                Point::new(ROW_START_X, FIRST_ROW_Y),
                Point::new(CANVAS_WIDTH - ROW_START_X, FIRST_ROW_Y),
            ],
            ViewBox::sized(CANVAS_WIDTH, 2.0 * FIRST_ROW_Y),
        )
    }

    /// Underlying path
    pub fn path(&self) -> &PathModel {
        &self.path
    }

    /// Waypoints in track order
    pub fn waypoints(&self) -> &[Point] {
        self.path.waypoints()
    }

    /// Logical canvas
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    /// Whether the waypoints cannot form a usable track
    pub fn is_degenerate(&self) -> bool {
        self.path.is_degenerate()
    }

    /// Forward mapping
    pub fn point_at(&self, fraction: f64) -> Point {
        self.path.point_at(fraction)
    }

    /// Inverse mapping
    pub fn resolve(
        &self,
        query: Point,
        duration: f64,
        max_snap_distance: f64,
    ) -> Option<ProximityMatch> {
        self.path.resolve(query, duration, max_snap_distance)
    }

    /// SVG path data (`d` attribute) for the track stroke
    pub fn svg_path_data(&self) -> String {
        self.waypoints()
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{} {}", command, point)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self::serpentine(DEFAULT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_row_serpentine() {
        let layout = TrackLayout::default();
        let expected = [
            (20.0, 20.0),
            (140.0, 20.0),
            (140.0, 70.0),
            (20.0, 70.0),
            (20.0, 120.0),
            (140.0, 120.0),
            (140.0, 170.0),
            (20.0, 170.0),
            (20.0, 220.0),
            (140.0, 220.0),
        ];

        let actual: Vec<(f64, f64)> = layout.waypoints().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(actual, expected);
        assert_eq!(layout.view_box(), ViewBox::sized(200.0, 250.0));
        assert_eq!(layout.view_box().to_attribute(), "0 0 200 250");
    }

    #[test]
    fn every_waypoint_fits_the_canvas() {
        for rows in 1..12 {
            let layout = TrackLayout::serpentine(rows);
            assert_eq!(layout.waypoints().len(), rows * 2);
            assert!(layout.waypoints().iter().all(|p| layout.view_box().contains(*p)));
            assert!(!layout.is_degenerate());
        }
    }

    #[test]
    fn zero_rows_is_one_row() {
        assert_eq!(TrackLayout::serpentine(0), TrackLayout::serpentine(1));
    }

    #[test]
    fn straight_bar() {
        let layout = TrackLayout::straight();
        assert_eq!(layout.path().segment_count(), 1);
        assert_eq!(layout.point_at(0.5), Point::new(100.0, 20.0));
        assert_eq!(layout.view_box().to_attribute(), "0 0 200 40");
    }

    #[test]
    fn svg_path_data_walks_waypoints() {
        let layout = TrackLayout::serpentine(2);
        assert_eq!(
            layout.svg_path_data(),
            "M 20,20 L 140,20 L 140,70 L 20,70"
        );
        assert_eq!(TrackLayout::new(Vec::new(), ViewBox::sized(10.0, 10.0)).svg_path_data(), "");
    }

    #[test]
    fn view_box_validity() {
        assert!(ViewBox::sized(200.0, 250.0).is_valid());
        assert!(!ViewBox::sized(0.0, 250.0).is_valid());
        assert!(!ViewBox::sized(200.0, f64::NAN).is_valid());
    }
}

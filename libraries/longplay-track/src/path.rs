//! Forward mapping from progress fraction to a point on the track

use crate::proximity::{self, ProximityMatch};
use longplay_core::Point;
use serde::{Deserialize, Serialize};

/// Result of forward mapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPosition {
    /// Point on the track
    pub point: Point,

    /// Fraction that produced `point`, after guarding (always in [0, 1])
    pub fraction: f64,
}

/// Map a progress fraction to a point on the track
///
/// Segments are equal-weight steps: with `n` waypoints the fraction is scaled
/// by `n - 1`, the integer part selects the segment and the remainder
/// interpolates within it.
///
/// Finite fractions outside [0, 1] are clamped to the track ends. A
/// non-finite fraction, fewer than two waypoints, or waypoints with
/// non-finite coordinates yield [`Point::ORIGIN`].
pub fn point_at_progress(waypoints: &[Point], fraction: f64) -> Point {
    if waypoints.len() < 2 || !fraction.is_finite() {
        return Point::ORIGIN;
    }

    let segments = waypoints.len() - 1;
    let segment_progress = fraction.clamp(0.0, 1.0) * segments as f64;
    let segment_index = segment_progress.floor() as usize;

    let point = if segment_index >= segments {
        waypoints[segments]
    } else {
        let remainder = segment_progress - segment_index as f64;
        waypoints[segment_index].lerp(waypoints[segment_index + 1], remainder)
    };

    if point.is_finite() {
        point
    } else {
        Point::ORIGIN
    }
}

/// Map a progress fraction to a [`PathPosition`]
pub fn position_at_progress(waypoints: &[Point], fraction: f64) -> PathPosition {
    let guarded = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };

    PathPosition {
        point: point_at_progress(waypoints, fraction),
        fraction: guarded,
    }
}

/// Immutable piecewise-linear track
///
/// Thin owner of a waypoint list. All mapping goes through the free
/// functions in this module and in [`proximity`], so a `PathModel` and a
/// bare slice always agree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathModel {
    waypoints: Vec<Point>,
}

impl PathModel {
    /// Create a path from its waypoints
    pub fn new(waypoints: impl Into<Vec<Point>>) -> Self {
        Self {
            waypoints: waypoints.into(),
        }
    }

    /// Waypoints in track order
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Number of segments (`waypoints - 1`, or 0)
    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Iterate over `(segment_index, start, end)`
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        self.waypoints
            .windows(2)
            .enumerate()
            .map(|(index, pair)| (index, pair[0], pair[1]))
    }

    /// Whether the path cannot produce meaningful positions
    ///
    /// True with fewer than two waypoints, any non-finite coordinate, or when
    /// every segment has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.waypoints.len() < 2
            || self.waypoints.iter().any(|p| !p.is_finite())
            || self.segments().all(|(_, start, end)| start == end)
    }

    /// Forward mapping, see [`point_at_progress`]
    pub fn point_at(&self, fraction: f64) -> Point {
        point_at_progress(&self.waypoints, fraction)
    }

    /// Forward mapping, see [`position_at_progress`]
    pub fn position_at(&self, fraction: f64) -> PathPosition {
        position_at_progress(&self.waypoints, fraction)
    }

    /// Inverse mapping, see [`proximity::resolve`]
    pub fn resolve(
        &self,
        query: Point,
        duration: f64,
        max_snap_distance: f64,
    ) -> Option<ProximityMatch> {
        proximity::resolve(&self.waypoints, query, duration, max_snap_distance)
    }
}

impl From<Vec<Point>> for PathModel {
    fn from(waypoints: Vec<Point>) -> Self {
        Self::new(waypoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner() -> Vec<Point> {
        vec![
            Point::new(20.0, 20.0),
            Point::new(140.0, 20.0),
            Point::new(140.0, 70.0),
        ]
    }

    #[test]
    fn endpoints() {
        let path = corner();
        assert_eq!(point_at_progress(&path, 0.0), Point::new(20.0, 20.0));
        assert_eq!(point_at_progress(&path, 1.0), Point::new(140.0, 70.0));
    }

    #[test]
    fn fraction_of_segment_count_hits_waypoints() {
        let path = corner();
        assert_eq!(point_at_progress(&path, 0.5), Point::new(140.0, 20.0));
    }

    #[test]
    fn segments_weigh_equally_regardless_of_length() {
        // First segment is 120 long, second only 50, both get half the range
        let path = corner();
        assert_eq!(point_at_progress(&path, 0.25), Point::new(80.0, 20.0));
        assert_eq!(point_at_progress(&path, 0.75), Point::new(140.0, 45.0));
    }

    #[test]
    fn out_of_range_clamps_to_ends() {
        let path = corner();
        assert_eq!(point_at_progress(&path, -0.5), point_at_progress(&path, 0.0));
        assert_eq!(point_at_progress(&path, 1.7), point_at_progress(&path, 1.0));
    }

    #[test]
    fn non_finite_fraction_falls_back_to_origin() {
        let path = corner();
        assert_eq!(point_at_progress(&path, f64::NAN), Point::ORIGIN);
        assert_eq!(point_at_progress(&path, f64::INFINITY), Point::ORIGIN);
        assert_eq!(point_at_progress(&path, f64::NEG_INFINITY), Point::ORIGIN);
    }

    #[test]
    fn too_few_waypoints_fall_back_to_origin() {
        assert_eq!(point_at_progress(&[], 0.5), Point::ORIGIN);
        assert_eq!(point_at_progress(&[Point::new(5.0, 5.0)], 0.5), Point::ORIGIN);
    }

    #[test]
    fn non_finite_waypoints_fall_back_to_origin() {
        let path = [Point::new(0.0, 0.0), Point::new(f64::NAN, 10.0)];
        assert_eq!(point_at_progress(&path, 0.5), Point::ORIGIN);
    }

    #[test]
    fn position_reports_guarded_fraction() {
        let path = corner();
        assert_eq!(position_at_progress(&path, 1.7).fraction, 1.0);
        assert_eq!(position_at_progress(&path, -3.0).fraction, 0.0);
        assert_eq!(position_at_progress(&path, f64::NAN).fraction, 0.0);
        assert_eq!(position_at_progress(&path, 0.25).fraction, 0.25);
    }

    #[test]
    fn degenerate_detection() {
        assert!(PathModel::default().is_degenerate());
        assert!(PathModel::new(vec![Point::new(1.0, 1.0)]).is_degenerate());
        assert!(PathModel::new(vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0)]).is_degenerate());
        assert!(PathModel::new(vec![Point::ORIGIN, Point::new(f64::INFINITY, 0.0)]).is_degenerate());
        assert!(!PathModel::new(corner()).is_degenerate());
    }

    #[test]
    fn model_agrees_with_free_functions() {
        let model = PathModel::new(corner());
        assert_eq!(model.segment_count(), 2);
        for fraction in [0.0, 0.1, 0.33, 0.5, 0.9, 1.0] {
            assert_eq!(model.point_at(fraction), point_at_progress(&corner(), fraction));
        }
    }

    #[test]
    fn serializes_as_plain_waypoint_list() {
        let model: PathModel =
            serde_json::from_str(r#"[{"x":0.0,"y":0.0},{"x":10.0,"y":0.0}]"#).unwrap();
        assert_eq!(model.segment_count(), 1);
        assert_eq!(model.point_at(0.5), Point::new(5.0, 0.0));
    }
}

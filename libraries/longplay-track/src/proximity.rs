//! Inverse mapping from an arbitrary point to the nearest track location
//!
//! Each segment is tested by perpendicular projection of the query point,
//! clamped to the segment itself. Candidates further away than the snap
//! distance are dropped; the nearest remaining one wins, ties going to the
//! lowest segment index.

use longplay_core::Point;
use serde::{Deserialize, Serialize};

/// Default maximum distance (in track units) for a pointer to snap to the track
pub const DEFAULT_SNAP_DISTANCE: f64 = 50.0;

/// Closest point on a single segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentProjection {
    /// Segment index within the path
    pub segment_index: usize,

    /// Projection parameter along the segment, clamped to [0, 1]
    pub t: f64,

    /// Closest point on the segment
    pub point: Point,

    /// Euclidean distance from the query point to `point`
    pub distance: f64,
}

/// Result of inverse mapping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityMatch {
    /// Playback time in seconds (`fraction * duration`)
    ///
    /// Only meaningful when the duration passed to [`resolve`] was positive.
    /// A non-finite duration yields `0.0` here instead of NaN.
    pub time: f64,

    /// Progress fraction of `point` along the whole track
    pub fraction: f64,

    /// Closest point on the track
    pub point: Point,

    /// Distance between the query point and `point`
    pub distance: f64,

    /// Segment that produced the match
    pub segment_index: usize,
}

/// Project `query` onto the segment `start -> end`
///
/// Returns `None` for zero-length segments and for non-finite input, so a
/// degenerate segment can never produce a false match.
pub fn project_onto_segment(
    segment_index: usize,
    start: Point,
    end: Point,
    query: Point,
) -> Option<SegmentProjection> {
    if !start.is_finite() || !end.is_finite() || !query.is_finite() {
        return None;
    }

    let segment = end - start;
    let length_squared = segment.length_squared();
    if length_squared <= 0.0 || !length_squared.is_finite() {
        return None;
    }

    let t = ((query - start).dot(segment) / length_squared).clamp(0.0, 1.0);
    let point = start + segment * t;

    Some(SegmentProjection {
        segment_index,
        t,
        point,
        distance: query.distance(point),
    })
}

/// Nearest segment projection within `max_snap_distance`
///
/// Among candidates at equal distance the lowest segment index wins.
pub fn nearest_projection(
    waypoints: &[Point],
    query: Point,
    max_snap_distance: f64,
) -> Option<SegmentProjection> {
    waypoints
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| project_onto_segment(index, pair[0], pair[1], query))
        .filter(|candidate| candidate.distance <= max_snap_distance)
        .fold(None, |best, candidate| match best {
            Some(best) if best.distance <= candidate.distance => Some(best),
            _ => Some(candidate),
        })
}

/// Resolve a query point to the nearest track location and playback time
///
/// The winning projection is converted to a track-wide fraction
/// `(segment_index + t) / (n - 1)` and then to `fraction * duration`.
///
/// Returns `None` when no track point lies within `max_snap_distance`, when
/// the track has fewer than two waypoints, or when the query point is not
/// finite. The geometry is resolved even for a zero or negative duration;
/// callers should ignore `time` unless `duration > 0`.
pub fn resolve(
    waypoints: &[Point],
    query: Point,
    duration: f64,
    max_snap_distance: f64,
) -> Option<ProximityMatch> {
    if waypoints.len() < 2 {
        return None;
    }

    let segments = (waypoints.len() - 1) as f64;
    let best = nearest_projection(waypoints, query, max_snap_distance)?;
    let fraction = (best.segment_index as f64 + best.t) / segments;
    let time = if duration.is_finite() {
        fraction * duration
    } else {
        0.0
    };

    Some(ProximityMatch {
        time,
        fraction,
        point: best.point,
        distance: best.distance,
        segment_index: best.segment_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> Vec<Point> {
        vec![Point::new(20.0, 20.0), Point::new(140.0, 20.0)]
    }

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(20.0, 20.0),
            Point::new(140.0, 20.0),
            Point::new(140.0, 70.0),
            Point::new(20.0, 70.0),
        ]
    }

    #[test]
    fn perpendicular_projection() {
        let hit = project_onto_segment(0, Point::new(20.0, 20.0), Point::new(140.0, 20.0), Point::new(50.0, 35.0))
            .unwrap();
        assert_eq!(hit.point, Point::new(50.0, 20.0));
        assert_eq!(hit.t, 0.25);
        assert_eq!(hit.distance, 15.0);
    }

    #[test]
    fn projection_clamps_to_segment_ends() {
        let before = project_onto_segment(0, Point::new(20.0, 20.0), Point::new(140.0, 20.0), Point::new(0.0, 20.0))
            .unwrap();
        assert_eq!(before.t, 0.0);
        assert_eq!(before.point, Point::new(20.0, 20.0));
        assert_eq!(before.distance, 20.0);

        let after = project_onto_segment(0, Point::new(20.0, 20.0), Point::new(140.0, 20.0), Point::new(170.0, 60.0))
            .unwrap();
        assert_eq!(after.t, 1.0);
        assert_eq!(after.point, Point::new(140.0, 20.0));
        assert_eq!(after.distance, 50.0);
    }

    #[test]
    fn zero_length_segment_is_excluded() {
        let p = Point::new(30.0, 30.0);
        assert!(project_onto_segment(0, p, p, p).is_none());
    }

    #[test]
    fn resolves_time_from_fraction() {
        let hit = resolve(&bar(), Point::new(80.0, 20.0), 100.0, DEFAULT_SNAP_DISTANCE).unwrap();
        assert!((hit.time - 50.0).abs() < 1e-9);
        assert!((hit.fraction - 0.5).abs() < 1e-12);
        assert!(hit.distance < 1e-9);
        assert_eq!(hit.segment_index, 0);
    }

    #[test]
    fn snap_distance_is_inclusive() {
        let query = Point::new(80.0, 70.0);
        assert!(resolve(&bar(), query, 100.0, 49.999).is_none());
        let hit = resolve(&bar(), query, 100.0, 50.0).unwrap();
        assert_eq!(hit.distance, 50.0);
    }

    #[test]
    fn far_query_has_no_match() {
        let query = Point::new(80.0, 80.0);
        assert!(resolve(&bar(), query, 100.0, 50.0).is_none());
        let hit = resolve(&bar(), query, 100.0, 70.0).unwrap();
        assert!((hit.distance - 60.0).abs() < 1e-9);
    }

    #[test]
    fn nearest_segment_wins() {
        // Close to the vertical connector between the two rows
        let hit = resolve(&zigzag(), Point::new(130.0, 45.0), 300.0, 50.0).unwrap();
        assert_eq!(hit.segment_index, 1);
        assert_eq!(hit.point, Point::new(140.0, 45.0));
        assert!((hit.fraction - 0.5).abs() < 1e-12);
        assert!((hit.time - 150.0).abs() < 1e-9);
    }

    #[test]
    fn ties_go_to_lowest_segment_index() {
        // Exactly halfway between the top row (segment 0) and bottom row (segment 2)
        let hit = resolve(&zigzag(), Point::new(80.0, 45.0), 300.0, 50.0).unwrap();
        assert_eq!(hit.segment_index, 0);
        assert_eq!(hit.point, Point::new(80.0, 20.0));
        assert_eq!(hit.distance, 25.0);
    }

    #[test]
    fn degenerate_segments_never_match() {
        let path = vec![
            Point::new(20.0, 20.0),
            Point::new(20.0, 20.0),
            Point::new(140.0, 20.0),
        ];
        let hit = resolve(&path, Point::new(20.0, 20.0), 100.0, 50.0).unwrap();
        assert_eq!(hit.segment_index, 1);
        assert_eq!(hit.time, 50.0);
        assert!(hit.time.is_finite() && hit.fraction.is_finite());

        let all_degenerate = vec![Point::new(5.0, 5.0); 4];
        assert!(resolve(&all_degenerate, Point::new(5.0, 5.0), 100.0, 50.0).is_none());
    }

    #[test]
    fn invalid_input_has_no_match() {
        assert!(resolve(&[], Point::ORIGIN, 100.0, 50.0).is_none());
        assert!(resolve(&[Point::ORIGIN], Point::ORIGIN, 100.0, 50.0).is_none());
        assert!(resolve(&bar(), Point::new(f64::NAN, 20.0), 100.0, 50.0).is_none());
        assert!(resolve(&bar(), Point::new(80.0, 20.0), 100.0, f64::NAN).is_none());
    }

    #[test]
    fn geometry_resolves_without_duration() {
        let hit = resolve(&bar(), Point::new(80.0, 25.0), 0.0, 50.0).unwrap();
        assert_eq!(hit.time, 0.0);
        assert_eq!(hit.point, Point::new(80.0, 20.0));

        let hit = resolve(&bar(), Point::new(80.0, 25.0), f64::NAN, 50.0).unwrap();
        assert_eq!(hit.time, 0.0);
        assert!((hit.fraction - 0.5).abs() < 1e-12);
    }

    #[test]
    fn start_of_track_reports_zero() {
        let hit = resolve(&bar(), Point::new(10.0, 20.0), 100.0, 50.0).unwrap();
        assert_eq!(hit.time, 0.0);
        assert_eq!(hit.point, Point::new(20.0, 20.0));
    }
}

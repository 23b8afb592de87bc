//! Integration tests for the forward and inverse track mappings
//!
//! Scenarios mirror how the player uses the track: an indicator driven by
//! playback time, and clicks/hovers translated back into seek targets.

use longplay_core::Point;
use longplay_track::{
    point_at_progress, resolve, Scene, TrackLayout, ViewBox, Viewport, DEFAULT_SNAP_DISTANCE,
};

// ===== Test Helpers =====

fn single_segment() -> Vec<Point> {
    vec![Point::new(20.0, 20.0), Point::new(140.0, 20.0)]
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ===== Forward Mapping =====

#[test]
fn boundaries_hit_first_and_last_waypoint() {
    let layout = TrackLayout::default();
    let waypoints = layout.waypoints();

    assert_eq!(point_at_progress(waypoints, 0.0), waypoints[0]);
    assert_eq!(point_at_progress(waypoints, 1.0), waypoints[waypoints.len() - 1]);
}

#[test]
fn out_of_range_fractions_do_not_extrapolate() {
    let layout = TrackLayout::default();
    let waypoints = layout.waypoints();

    assert_eq!(point_at_progress(waypoints, -0.5), point_at_progress(waypoints, 0.0));
    assert_eq!(point_at_progress(waypoints, 1.7), point_at_progress(waypoints, 1.0));
}

#[test]
fn repeated_calls_are_identical() {
    let layout = TrackLayout::default();
    let first = point_at_progress(layout.waypoints(), 0.6180339887);
    for _ in 0..1000 {
        assert_eq!(point_at_progress(layout.waypoints(), 0.6180339887), first);
    }
}

#[test]
fn x_never_decreases_along_a_rightward_segment() {
    let waypoints = single_segment();
    let mut previous = f64::NEG_INFINITY;
    for step in 0..=100 {
        let point = point_at_progress(&waypoints, f64::from(step) / 100.0);
        assert!(point.x >= previous);
        previous = point.x;
    }
}

// ===== Round Trip =====

#[test]
fn midpoint_round_trip() {
    let waypoints = single_segment();

    let point = point_at_progress(&waypoints, 0.5);
    assert_eq!(point, Point::new(80.0, 20.0));

    let hit = resolve(&waypoints, point, 100.0, DEFAULT_SNAP_DISTANCE).unwrap();
    assert_close(hit.time, 50.0);
    assert_close(hit.distance, 0.0);
}

#[test]
fn every_bookmark_marker_resolves_to_its_own_time() {
    let layout = TrackLayout::default();
    let duration = 5400.0;
    let times = [0.0, 12.5, 600.0, 1799.9, 2700.0, 5399.0, 5400.0];

    let scene = Scene::build(&layout, 0.0, duration, times, None);
    assert_eq!(scene.markers.len(), times.len());

    for marker in &scene.markers {
        let hit = layout.resolve(marker.point, duration, DEFAULT_SNAP_DISTANCE).unwrap();
        assert!(
            (hit.time - marker.time).abs() < 1e-6,
            "marker at {} resolved to {}",
            marker.time,
            hit.time
        );
    }
}

// ===== Snap Tolerance =====

#[test]
fn snap_tolerance_decides_match() {
    let waypoints = single_segment();
    let query = Point::new(80.0, 80.0); // 60 units below the bar

    assert!(resolve(&waypoints, query, 100.0, 50.0).is_none());

    let hit = resolve(&waypoints, query, 100.0, 70.0).unwrap();
    assert_close(hit.distance, 60.0);
    assert_close(hit.time, 50.0);
}

// ===== Degenerate Paths =====

#[test]
fn duplicate_waypoints_do_not_poison_results() {
    let waypoints = vec![
        Point::new(20.0, 20.0),
        Point::new(140.0, 20.0),
        Point::new(140.0, 20.0),
        Point::new(140.0, 70.0),
    ];

    for step in 0..=20 {
        let point = point_at_progress(&waypoints, f64::from(step) / 20.0);
        assert!(point.is_finite());
    }

    let hit = resolve(&waypoints, Point::new(140.0, 20.0), 90.0, 50.0).unwrap();
    assert!(hit.time.is_finite());
    assert_eq!(hit.segment_index, 0);
    assert_close(hit.time, 30.0);
}

// ===== Tie Break =====

#[test]
fn equal_distances_pick_lower_segment() {
    let layout = TrackLayout::serpentine(2);
    // Between row 0 (segment 0) and row 1 (segment 2), 25 units from each
    let hit = layout.resolve(Point::new(50.0, 45.0), 300.0, 50.0).unwrap();
    assert_eq!(hit.segment_index, 0);
    assert_eq!(hit.point, Point::new(50.0, 20.0));
}

// ===== Pointer Pipeline =====

#[test]
fn click_on_screen_resolves_through_viewport() {
    let layout = TrackLayout::default();
    let viewport = Viewport::new(layout.view_box(), 800.0, 500.0);

    // Middle of the third row, drawn 2x and centered horizontally
    let screen = viewport.to_screen(Point::new(80.0, 120.0));
    assert_eq!(screen, Point::new(360.0, 240.0));

    let logical = viewport.to_logical(screen);
    let hit = layout.resolve(logical, 90.0, DEFAULT_SNAP_DISTANCE).unwrap();
    assert_close(hit.time, 45.0);
}

#[test]
fn custom_layout_from_configuration() {
    let layout = TrackLayout::new(
        vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
        ViewBox::sized(100.0, 100.0),
    );
    let hit = layout.resolve(Point::new(100.0, 0.0), 10.0, 100.0).unwrap();
    assert_eq!(hit.point, Point::new(50.0, 50.0));
    assert_close(hit.time, 5.0);
}

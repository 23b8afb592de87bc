//! Longplay - Progress Track
//!
//! Geometry for a progress indicator that runs along an arbitrary polyline
//! instead of a straight bar.
//!
//! This crate provides:
//! - Forward mapping: progress fraction -> point on the track ([`point_at_progress`])
//! - Inverse mapping: pointer position -> nearest track point, fraction and
//!   playback time ([`resolve`])
//! - Track layouts (the serpentine default, a straight bar, custom waypoints)
//! - Screen <-> logical coordinate transform for pointer input
//! - A render-ready scene (indicator, bookmark markers, hover label) and SVG output
//!
//! # Mapping policy
//!
//! Every segment is an equal-weight step of the progress range regardless of
//! its geometric length. On a track with `n` waypoints, fraction `k / (n-1)`
//! always lands exactly on waypoint `k`. Both directions use the same policy,
//! so a point produced by the forward mapping resolves back to the fraction
//! that produced it.
//!
//! # Failure semantics
//!
//! Nothing here returns an error or panics. Invalid input maps to defined
//! results: a fallback point at the origin, or `None` when no track point
//! lies within the snap distance.
//!
//! # Example
//!
//! ```rust
//! use longplay_core::Point;
//! use longplay_track::{point_at_progress, resolve, DEFAULT_SNAP_DISTANCE};
//!
//! let waypoints = [Point::new(20.0, 20.0), Point::new(140.0, 20.0)];
//!
//! let indicator = point_at_progress(&waypoints, 0.5);
//! assert_eq!(indicator, Point::new(80.0, 20.0));
//!
//! let hit = resolve(&waypoints, Point::new(80.0, 20.0), 100.0, DEFAULT_SNAP_DISTANCE)
//!     .expect("query lies on the track");
//! assert!((hit.time - 50.0).abs() < 1e-9);
//! assert!(hit.distance < 1e-9);
//!
//! // Too far away from the track: no seek target
//! assert!(resolve(&waypoints, Point::new(80.0, 80.0), 100.0, 50.0).is_none());
//! ```

#![forbid(unsafe_code)]

pub mod layout;
pub mod path;
pub mod proximity;
pub mod render;
pub mod viewport;

pub use layout::{TrackLayout, ViewBox, DEFAULT_ROWS};
pub use path::{point_at_progress, position_at_progress, PathModel, PathPosition};
pub use proximity::{
    nearest_projection, project_onto_segment, resolve, ProximityMatch, SegmentProjection,
    DEFAULT_SNAP_DISTANCE,
};
pub use render::{
    bookmark_markers, indicator, progress_fraction, render_svg, HoverLabel, Marker, Scene,
};
pub use viewport::Viewport;

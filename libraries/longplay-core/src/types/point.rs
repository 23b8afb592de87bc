/// 2D point in a track's logical coordinate space
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Immutable 2D coordinate
///
/// Used both for waypoints and for vectors between them. Coordinates live in
/// the track's own drawing space (the SVG view box), not in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downwards, like SVG)
    pub y: f64,
}

impl Point {
    /// The origin, also the fallback for invalid geometry
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Dot product, treating both points as vectors
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared vector length
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Vector length
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Linear interpolation towards `other` by `t`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_arithmetic() {
        let a = Point::new(20.0, 20.0);
        let b = Point::new(140.0, 70.0);

        assert_eq!(b - a, Point::new(120.0, 50.0));
        assert_eq!(a + Point::new(1.0, -1.0), Point::new(21.0, 19.0));
        assert_eq!((b - a) * 0.5, Point::new(60.0, 25.0));
        assert_eq!((b - a).length(), 130.0);
        assert_eq!(a.distance(b), 130.0);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(140.0, 20.0);
        let b = Point::new(140.0, 70.0);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.2), Point::new(140.0, 30.0));
    }

    #[test]
    fn finiteness() {
        assert!(Point::ORIGIN.is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn display_matches_svg_coordinate_pairs() {
        assert_eq!(Point::new(20.0, 120.5).to_string(), "20,120.5");
    }
}

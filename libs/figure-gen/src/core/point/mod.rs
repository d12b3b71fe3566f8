//! Point/vector algebra on top of `glam::DVec3`.
//!
//! Coordinates are kept in `f64` for the whole pipeline; the text writer is
//! the only place that rounds them.

pub use glam::DVec3 as Point;

/// Multiplies every axis of `p` by `s`.
///
/// # Examples
/// ```
/// use figure_gen::core::point::{scale, Point};
/// assert_eq!(scale(Point::new(1.0, -2.0, 3.0), 2.0), Point::new(2.0, -4.0, 6.0));
/// ```
#[inline]
pub fn scale(p: Point, s: f64) -> Point {
    p * s
}

/// Component-wise sum of two points.
#[inline]
pub fn add(a: Point, b: Point) -> Point {
    a + b
}

/// Euclidean length of `p`.
///
/// # Examples
/// ```
/// use figure_gen::core::point::{norm, Point};
/// assert_eq!(norm(Point::new(3.0, 4.0, 0.0)), 5.0);
/// ```
#[inline]
pub fn norm(p: Point) -> f64 {
    p.length()
}

/// Distance between `a` and `b`, i.e. `norm(b - a)`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    norm(b - a)
}

/// Scales `p` to unit length.
///
/// A zero vector has no direction; the result is then NaN in every axis.
/// Callers that can meet degenerate input check the length first.
///
/// # Examples
/// ```
/// use figure_gen::core::point::{normalize, Point};
/// let n = normalize(Point::new(0.0, 0.0, 5.0));
/// assert_eq!(n, Point::Z);
/// assert!(normalize(Point::ZERO).is_nan());
/// ```
#[inline]
pub fn normalize(p: Point) -> Point {
    scale(p, 1.0 / norm(p))
}

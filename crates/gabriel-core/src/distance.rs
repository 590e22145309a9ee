//! Distance metrics and the diametral-circle containment test.

use std::fmt;

use crate::Point;

/// Euclidean (L2) distance between two points.
///
/// Always non-negative; coincident points are at distance 0.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    length(a.x as f64, a.y as f64, b.x as f64, b.y as f64)
}

/// Manhattan (L1) distance between two points.
///
/// Computed in `i64`, so any two `Point`s are in range.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    (a.x as i64 - b.x as i64).abs() + (a.y as i64 - b.y as i64).abs()
}

#[inline]
fn length(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).abs().sqrt()
}

/// Reports whether `c` lies within or on the circle whose diameter is the
/// segment `a`–`b`.
///
/// The center is reached by walking half the segment length from `a` along
/// the unit direction towards `b`, and `c` is inside when its distance to
/// that center is at most the radius.
///
/// Returns [`GeomError::DegenerateSegment`] when `a` and `b` coincide, since
/// the direction of a zero-length segment is undefined.
pub fn circle_contains(a: Point, b: Point, c: Point) -> Result<bool, GeomError> {
    let len = distance(a, b);
    if len == 0.0 {
        return Err(GeomError::DegenerateSegment { a, b });
    }
    let radius = len / 2.0;

    let dx = b.x as f64 - a.x as f64;
    let dy = b.y as f64 - a.y as f64;

    let mid_x = a.x as f64 + (dx / len) * radius;
    let mid_y = a.y as f64 + (dy / len) * radius;

    let clen = length(mid_x, mid_y, c.x as f64, c.y as f64);
    Ok(clen <= radius)
}

/// Errors raised by geometric predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// The two endpoints of a segment coincide.
    DegenerateSegment { a: Point, b: Point },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSegment { a, b } => {
                write!(f, "degenerate segment: endpoints {a} and {b} coincide")
            }
        }
    }
}

impl std::error::Error for GeomError {}

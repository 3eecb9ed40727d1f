//! Geometry kernel
//!
//! Pure point-in-shape predicates and distance helpers shared by every shape
//! variant. Nothing here holds state; all functions take the coordinates they
//! need by value.

use serde::{Deserialize, Serialize};

/// A point in canvas (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean_distance(*self, *other)
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Straight-line distance between two points.
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Perpendicular distance from `p` to the line carrying the segment `a`-`b`.
///
/// The distance is measured against the infinite supporting line; callers that
/// need segment semantics bound the query with [`point_in_axis_aligned_box`]
/// first (see [`point_near_segment`]). A degenerate segment falls back to the
/// distance to `a`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let length = euclidean_distance(a, b);
    if length == 0.0 {
        return euclidean_distance(p, a);
    }
    ((b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x).abs() / length
}

/// Inclusive containment in the axis-aligned box spanned by two opposite corners.
pub fn point_in_axis_aligned_box(p: Point, corner1: Point, corner2: Point) -> bool {
    corner1.x.min(corner2.x) <= p.x
        && p.x <= corner1.x.max(corner2.x)
        && corner1.y.min(corner2.y) <= p.y
        && p.y <= corner1.y.max(corner2.y)
}

/// Segment hit test: `p` lies inside the segment's bounding box and closer
/// than `tolerance` to its supporting line.
pub fn point_near_segment(p: Point, a: Point, b: Point, tolerance: f64) -> bool {
    point_in_axis_aligned_box(p, a, b) && point_to_segment_distance(p, a, b) < tolerance
}

/// Containment in the ellipse inscribed in the box spanned by two corners.
///
/// Degenerate boxes (zero width or height) contain nothing.
pub fn point_in_ellipse(p: Point, corner1: Point, corner2: Point) -> bool {
    let rx = (corner2.x - corner1.x).abs() / 2.0;
    let ry = (corner2.y - corner1.y).abs() / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let cx = (corner1.x + corner2.x) / 2.0;
    let cy = (corner1.y + corner2.y) / 2.0;
    let nx = (p.x - cx) / rx;
    let ny = (p.y - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// True when `p` is within `tolerance` of any edge between consecutive points.
///
/// The edge list is not wrapped: a closed ring carries its closing point
/// explicitly.
pub fn point_on_polygon_boundary(p: Point, points: &[Point], tolerance: f64) -> bool {
    points
        .windows(2)
        .any(|edge| point_near_segment(p, edge[0], edge[1], tolerance))
}

/// Even-odd ray casting against the ring formed by `points` (implicitly closed).
///
/// Horizontal edges never cross the ray and are skipped outright, so no
/// intersection is computed for them.
pub fn point_in_polygon_ray_cast(p: Point, points: &[Point]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut p1 = points[0];
    for i in 1..=n {
        let p2 = points[i % n];
        if p1.y != p2.y
            && p.y > p1.y.min(p2.y)
            && p.y <= p1.y.max(p2.y)
            && p.x <= p1.x.max(p2.x)
        {
            let x_intersection = (p.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
            if p1.x == p2.x || p.x <= x_intersection {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}

/// Square-neighbourhood proximity: both axis offsets strictly below `radius`.
pub fn point_within_radius(p: Point, q: Point, radius: f64) -> bool {
    (p.x - q.x).abs() < radius && (p.y - q.y).abs() < radius
}

/// Componentwise minimum over a point set, `None` when empty.
pub fn min_corner<I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some(p),
        Some(m) => Some(Point::new(m.x.min(p.x), m.y.min(p.y))),
    })
}

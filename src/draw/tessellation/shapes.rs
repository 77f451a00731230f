//! Standard shape outlines
//!
//! Oriented boxes around segments (walls, doors, secret passages) and regular
//! polygon approximations of circles (trees, columns).

use crate::draw::geometry::Point;
use std::f64::consts::TAU;

/// Number of vertices used to approximate a circle
pub const CIRCLE_STEPS: usize = 8;

/// Closed rectangle of half-width `half_thickness` around the segment `a`-`b`.
///
/// Returns 5 points (first repeated last), or nothing for a zero-length
/// segment since it has no direction to build the box around.
pub fn build_box(a: Point, b: Point, half_thickness: f64) -> Vec<Point> {
    let dist = (b - a).length();
    if dist == 0.0 {
        return Vec::new();
    }

    let adj = Point::new(
        (b.y - a.y) / dist * half_thickness,
        (a.x - b.x) / dist * half_thickness,
    );

    vec![a + adj, a - adj, b - adj, b + adj, a + adj]
}

/// One box per consecutive point pair, skipping degenerate segments
pub fn build_segment_boxes(points: &[Point], half_thickness: f64) -> Vec<Vec<Point>> {
    points
        .windows(2)
        .map(|pair| build_box(pair[0], pair[1], half_thickness))
        .filter(|shape| !shape.is_empty())
        .collect()
}

/// `steps` points evenly spaced on a circle, starting at angle 0.
///
/// With `close` the ring gets one more point equal to the first.
pub fn approximate_circle(center: Point, radius: f64, steps: usize, close: bool) -> Vec<Point> {
    let start = Point::new(radius, 0.0);
    let mut points = Vec::with_capacity(steps + usize::from(close));

    for i in 0..steps {
        let angle = TAU * i as f64 / steps as f64;
        points.push(center + start.rotated(angle));
    }

    if close {
        points.push(center + start);
    }

    points
}

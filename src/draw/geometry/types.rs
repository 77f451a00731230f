//! Core geometry types for map export
//!
//! Points in map space as read from the document, and the occluder records
//! that carry finished polygons to the serializer.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotate counter-clockwise about the origin
    pub fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Semantic marker the renderer reads off an occluder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccluderTag {
    Door,
    Secret,
    Terrain,
}

impl OccluderTag {
    pub fn element_name(self) -> &'static str {
        match self {
            OccluderTag::Door => "door",
            OccluderTag::Secret => "secret",
            OccluderTag::Terrain => "terrain",
        }
    }
}

/// One output polygon, in relative map coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Occluder {
    pub id: u32,
    pub points: Vec<Point>,
    pub tag: Option<OccluderTag>,
}

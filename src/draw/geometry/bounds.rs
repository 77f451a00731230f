//! Map bounds and the coordinate frames derived from them
//!
//! Shapes are built in *relative* space: re-origined to the map's minimum X and
//! flipped so Y grows upward from the map's maximum Y. The [`Projection`] then
//! centers relative space on the origin and scales it into output pixels.

use super::types::Point;
use crate::config::RenderOptions;

/// Axis-aligned extent of every point scanned from the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Re-origin a map point to the box and flip its Y axis
    pub fn relative(&self, point: Point) -> Point {
        Point::new(point.x - self.min_x, self.max_y - point.y)
    }
}

/// Folds points into a [`BoundingBox`].
///
/// Each of the four reducers starts empty and takes the first value it sees.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsAccumulator {
    min_x: Option<f64>,
    max_x: Option<f64>,
    min_y: Option<f64>,
    max_y: Option<f64>,
    count: usize,
}

fn reduce(current: Option<f64>, value: f64, pick: fn(f64, f64) -> f64) -> Option<f64> {
    Some(match current {
        Some(existing) => pick(existing, value),
        None => value,
    })
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(&mut self, point: Point) {
        self.min_x = reduce(self.min_x, point.x, f64::min);
        self.max_x = reduce(self.max_x, point.x, f64::max);
        self.min_y = reduce(self.min_y, point.y, f64::min);
        self.max_y = reduce(self.max_y, point.y, f64::max);
        self.count += 1;
    }

    /// Number of points folded in so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` until at least one point has been included
    pub fn finish(self) -> Option<BoundingBox> {
        Some(BoundingBox {
            min_x: self.min_x?,
            max_x: self.max_x?,
            min_y: self.min_y?,
            max_y: self.max_y?,
        })
    }
}

/// Relative map space to output pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: Point,
    ratio: f64,
    shift: Point,
}

impl Projection {
    pub fn new(bounds: &BoundingBox, options: &RenderOptions) -> Self {
        Self {
            center: Point::new(bounds.width() / 2.0, bounds.height() / 2.0),
            ratio: options.ratio,
            shift: Point::new(options.shift_x, options.shift_y),
        }
    }

    pub fn project(&self, point: Point) -> Point {
        (point - self.center) * self.ratio + self.shift
    }
}

//! Door, tree and column outlines
//!
//! Obstacles only record an anchor (`begin`), an angle in degrees and a scale;
//! the outline is rebuilt from those.

use crate::document::ObstacleRecord;
use crate::draw::geometry::{BoundingBox, Point};
use crate::draw::parsing::TreeTiers;
use crate::draw::tessellation::{approximate_circle, build_box, CIRCLE_STEPS};

/// Box spanning the door opening.
///
/// The pivot sits half a scale off `begin`, perpendicular to the door's
/// direction. A single door reaches one half-scale either side of the pivot; a
/// double door reaches three half-scales forward.
///
/// Thin mode (`thickness_factor == 0`) still yields the 5-point box, collapsed
/// to zero width, rather than a single line like walls get.
pub fn door_shape(
    obstacle: &ObstacleRecord,
    double: bool,
    bounds: &BoundingBox,
    thickness_factor: f64,
) -> Vec<Point> {
    let angle = obstacle.angle.to_radians();
    let (sin, cos) = angle.sin_cos();
    let half = obstacle.scale / 2.0;

    let pivot = bounds.relative(obstacle.begin) + Point::new(half * sin, -half * cos);
    let unit = Point::new(half * cos, half * sin);
    let reach = if double { 3.0 } else { 1.0 };

    build_box(pivot - unit, pivot + unit * reach, 0.1 * obstacle.scale * thickness_factor)
}

/// Open ring approximating a tree canopy
pub fn tree_shape(obstacle: &ObstacleRecord, tiers: TreeTiers, bounds: &BoundingBox) -> Vec<Point> {
    let mut center = obstacle.begin;
    if tiers.mid {
        let half = obstacle.scale / 2.0;
        center = center + Point::new(half, half).rotated(obstacle.angle.to_radians());
    }

    approximate_circle(bounds.relative(center), tiers.radius(obstacle.scale), CIRCLE_STEPS, false)
}

/// Closed ring approximating a column
pub fn column_shape(obstacle: &ObstacleRecord, bounds: &BoundingBox) -> Vec<Point> {
    approximate_circle(bounds.relative(obstacle.begin), obstacle.scale / 2.0, CIRCLE_STEPS, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundingBox {
        BoundingBox { min_x: 0.0, max_x: 20.0, min_y: 0.0, max_y: 20.0 }
    }

    fn obstacle(x: f64, y: f64, angle: f64, scale: f64) -> ObstacleRecord {
        ObstacleRecord { id: 1, begin: Point::new(x, y), angle, scale }
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_single_door_spans_one_scale() {
        // begin (4, 10) -> relative (4, 10); pivot (4, 8); unit (2, 0)
        let shape = door_shape(&obstacle(4.0, 10.0, 0.0, 4.0), false, &bounds(), 1.0);
        assert_eq!(shape.len(), 5);
        assert_close(shape[0], Point::new(2.0, 7.6));
        assert_close(shape[1], Point::new(2.0, 8.4));
        assert_close(shape[2], Point::new(6.0, 8.4));
        assert_close(shape[3], Point::new(6.0, 7.6));
    }

    #[test]
    fn test_double_door_reaches_three_units_forward() {
        let shape = door_shape(&obstacle(4.0, 10.0, 0.0, 4.0), true, &bounds(), 1.0);
        assert_close(shape[0], Point::new(2.0, 7.6));
        assert_close(shape[2], Point::new(10.0, 8.4));
    }

    #[test]
    fn test_thin_door_is_zero_width_box() {
        let shape = door_shape(&obstacle(4.0, 10.0, 0.0, 4.0), false, &bounds(), 0.0);
        assert_eq!(shape.len(), 5);
        for (point, expected) in shape.iter().zip([(2.0, 8.0), (2.0, 8.0), (6.0, 8.0), (6.0, 8.0), (2.0, 8.0)]) {
            assert_close(*point, Point::new(expected.0, expected.1));
        }
    }

    #[test]
    fn test_rotated_door() {
        // 90 degrees: pivot offset (2, 0), unit (0, 2)
        let shape = door_shape(&obstacle(4.0, 10.0, 90.0, 4.0), false, &bounds(), 1.0);
        assert_close(shape[0], Point::new(6.4, 8.0));
        assert_close(shape[3], Point::new(6.4, 12.0));
    }

    #[test]
    fn test_tree_ring_is_open() {
        let shape = tree_shape(&obstacle(10.0, 10.0, 0.0, 8.0), TreeTiers::default(), &bounds());
        assert_eq!(shape.len(), CIRCLE_STEPS);
        assert_close(shape[0], Point::new(12.0, 10.0));
    }

    #[test]
    fn test_mid_tree_is_offset_before_flip() {
        let tiers = TreeTiers { mid: true, ..Default::default() };
        let shape = tree_shape(&obstacle(10.0, 10.0, 0.0, 6.0), tiers, &bounds());
        // center (13, 13) in map space -> (13, 7) relative, radius 1
        assert_close(shape[0], Point::new(14.0, 7.0));
    }

    #[test]
    fn test_column_ring_is_closed() {
        let shape = column_shape(&obstacle(5.0, 5.0, 45.0, 2.0), &bounds());
        assert_eq!(shape.len(), CIRCLE_STEPS + 1);
        assert_eq!(shape[0], shape[CIRCLE_STEPS]);
        assert_close(shape[0], Point::new(6.0, 15.0));
    }
}

//! Wall and secret passage outlines
//!
//! Both come from Wall rows and share the same geometry; only the tag on the
//! resulting occluders differs.

use crate::config::RenderOptions;
use crate::document::WallRecord;
use crate::draw::geometry::{BoundingBox, Point};
use crate::draw::tessellation::build_segment_boxes;

/// Polygons for one wall: the raw polyline in thin mode, otherwise one box
/// per non-degenerate segment
pub fn wall_shapes(wall: &WallRecord, bounds: &BoundingBox, options: &RenderOptions) -> Vec<Vec<Point>> {
    let points: Vec<Point> = wall.points.iter().map(|&p| bounds.relative(p)).collect();

    if options.is_thin() {
        return if points.is_empty() { Vec::new() } else { vec![points] };
    }

    let half_thickness = wall.thickness / 10.0 * options.thickness_factor;
    let boxes = build_segment_boxes(&points, half_thickness);

    let segments = points.len().saturating_sub(1);
    if boxes.len() < segments {
        log::debug!(
            "Wall {}: skipped {} zero-length segment(s)",
            wall.id,
            segments - boxes.len()
        );
    }

    boxes
}

use crate::document::FigureRecord;
use crate::draw::geometry::{BoundingBox, Point};

/// A terrain figure's outline, moved into relative space as-is
pub fn terrain_shape(figure: &FigureRecord, bounds: &BoundingBox) -> Vec<Point> {
    figure.points.iter().map(|&p| bounds.relative(p)).collect()
}

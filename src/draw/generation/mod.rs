//! Occluder generation for classified map features
//!
//! Turns each feature's editor record into one or more polygons in relative map
//! space and stamps them with run-scoped ids.
//!
//! # Submodules
//! - `walls` - Walls and secret passages (segment boxes or thin polylines)
//! - `obstacles` - Doors, trees and columns
//! - `terrain` - Terrain figures

mod walls;
mod obstacles;
mod terrain;

use crate::config::RenderOptions;
use crate::draw::geometry::{BoundingBox, Occluder, OccluderTag, Point};
use crate::draw::parsing::{ClassifiedFeatures, Feature, FeatureKind};

pub use walls::wall_shapes;
pub use obstacles::{door_shape, tree_shape, column_shape};
pub use terrain::terrain_shape;

/// Hands out occluder ids: dense, starting at 1, never reused within a run
#[derive(Debug)]
pub struct OccluderIds {
    next: u32,
}

impl OccluderIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn issue(&mut self, points: Vec<Point>, tag: Option<OccluderTag>) -> Occluder {
        let id = self.next;
        self.next += 1;
        Occluder { id, points, tag }
    }

    /// Ids issued so far
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for OccluderIds {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag carried by every occluder of a feature kind
pub fn tag_for(kind: FeatureKind) -> Option<OccluderTag> {
    match kind {
        FeatureKind::Door => Some(OccluderTag::Door),
        FeatureKind::Secret => Some(OccluderTag::Secret),
        FeatureKind::Tree => Some(OccluderTag::Terrain),
        FeatureKind::Wall | FeatureKind::Column | FeatureKind::Terrain => None,
    }
}

/// Polygons for one feature; empty when its geometry is degenerate
pub fn feature_shapes(feature: &Feature, bounds: &BoundingBox, options: &RenderOptions) -> Vec<Vec<Point>> {
    let shape = match feature {
        Feature::Wall(wall) | Feature::Secret(wall) => return wall_shapes(wall, bounds, options),
        Feature::Door { obstacle, double } => door_shape(obstacle, *double, bounds, options.thickness_factor),
        Feature::Tree { obstacle, tiers } => tree_shape(obstacle, *tiers, bounds),
        Feature::Column(obstacle) => column_shape(obstacle, bounds),
        Feature::Terrain(figure) => terrain_shape(figure, bounds),
    };

    if shape.is_empty() {
        Vec::new()
    } else {
        vec![shape]
    }
}

/// Build every occluder, grouped by kind in output order and by discovery
/// order within a kind. Ids follow the same order.
pub fn generate_occluders(
    features: &ClassifiedFeatures,
    bounds: &BoundingBox,
    options: &RenderOptions,
) -> Vec<Occluder> {
    let mut ids = OccluderIds::new();
    let mut occluders = Vec::new();

    for kind in FeatureKind::ALL {
        let tag = tag_for(kind);
        let before = occluders.len();

        for feature in features.of_kind(kind) {
            for shape in feature_shapes(feature, bounds, options) {
                occluders.push(ids.issue(shape, tag));
            }
        }

        log::debug!("Generated {} {} occluder(s)", occluders.len() - before, kind.name());
    }

    log::info!("Generated {} occluder(s) from {} feature(s)", ids.issued(), features.len());
    occluders
}

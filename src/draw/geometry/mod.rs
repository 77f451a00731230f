//! Geometry module for map export
//!
//! # Submodules
//! - `types` - Core primitives (Point, Occluder, OccluderTag)
//! - `bounds` - Map bounding box, relative frame and pixel projection

mod types;
mod bounds;

pub use types::{
    Point,
    Occluder,
    OccluderTag,
};

pub use bounds::{
    BoundingBox,
    BoundsAccumulator,
    Projection,
};

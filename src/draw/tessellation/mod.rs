//! Shape outline construction
//!
//! # Submodules
//! - `shapes` - Segment boxes and circle approximations

mod shapes;

pub use shapes::{
    CIRCLE_STEPS,
    build_box,
    build_segment_boxes,
    approximate_circle,
};

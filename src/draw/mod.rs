//! Map geometry pipeline
//!
//! - `geometry` - Points, bounds, projection and occluder records
//! - `parsing` - Document indexing and feature classification
//! - `tessellation` - Box and circle outlines
//! - `generation` - Per-feature occluder construction

pub mod geometry;
pub mod parsing;
pub mod tessellation;
pub mod generation;

//! Converts map editor exports into occluder XML for a lighting renderer.
//!
//! The pipeline runs in four stages over one parsed document:
//! 1. index the document (map bounds, live layers)
//! 2. classify live layers into walls, doors, secrets, trees, columns, terrain
//! 3. build each feature's polygons in relative map space
//! 4. project into pixel space and serialize as `<occluder>` records
//!
//! # Example
//! ```ignore
//! let document = load_document("maps/cave.dps")?;
//! let xml = convert_document(&document, &RenderOptions::default())?;
//! ```

pub mod config;
pub mod document;
pub mod draw;
pub mod error;
pub mod export;
pub mod serialize_xml;

pub use config::{resolve_output_path, RenderOptions};
pub use document::{load_document, MapDocument};
pub use error::ExportError;
pub use export::{convert_document, export_file};

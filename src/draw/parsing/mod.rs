//! Map document indexing and feature classification
//!
//! # Submodules
//! - `layers` - Live layer discovery through the bunch hierarchy
//! - `features` - Layer name rules and feature row lookup

mod layers;
mod features;

use crate::document::{row_id, row_points, LayerRecord, MapDocument, FIGURE_TABLE, POLYGON_TABLE};
use crate::draw::geometry::{BoundingBox, BoundsAccumulator};
use crate::error::{ExportError, RowId};
use serde_json::Value;
use std::collections::HashSet;

pub use layers::{collect_live_layers, ROOT_BUNCH_ID, ROOT_BUNCH_NAME};
pub use features::{
    classify_layers,
    ClassifiedFeatures,
    Feature,
    FeatureKind,
    FeatureRule,
    FeatureTables,
    TreeTiers,
    FEATURE_RULES,
};

/// Map-wide frame and the layers that will be exported
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentIndex {
    pub bounds: BoundingBox,
    pub live_layers: Vec<LayerRecord>,
}

/// Scan the whole document once: bounds first, then the live layer list
pub fn index_document(document: &MapDocument) -> Result<DocumentIndex, ExportError> {
    document.require_tables()?;
    let bounds = scan_bounds(document)?;
    let live_layers = collect_live_layers(document)?;
    log::debug!("Found {} live layer(s)", live_layers.len());
    Ok(DocumentIndex { bounds, live_layers })
}

/// Bounding box over every `points` list in every table.
///
/// Figure rows only count when some polygon references them; editors leave
/// stale figures behind that would otherwise stretch the map.
pub fn scan_bounds(document: &MapDocument) -> Result<BoundingBox, ExportError> {
    let figures = referenced_figures(document);
    let mut acc = BoundsAccumulator::new();

    for (table, rows) in &document.tables {
        let is_figure_table = table == FIGURE_TABLE;
        for row in rows {
            if is_figure_table && !row_id(row).is_some_and(|id| figures.contains(&id)) {
                continue;
            }
            if let Some(points) = row_points(table, row)? {
                for point in points {
                    acc.include(point);
                }
            }
        }
    }

    let count = acc.count();
    let bounds = acc.finish().ok_or(ExportError::EmptyMap)?;
    log::debug!(
        "Scanned {} point(s): x [{}, {}], y [{}, {}]",
        count, bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
    );
    Ok(bounds)
}

fn referenced_figures(document: &MapDocument) -> HashSet<RowId> {
    document
        .tables
        .get(POLYGON_TABLE)
        .into_iter()
        .flatten()
        .filter_map(|polygon| polygon.get("figures").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_i64)
        .collect()
}

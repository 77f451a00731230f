//! Layer hierarchy traversal
//!
//! Layers hang off a tree of bunches rooted at bunch id 1. Only layers reachable
//! from that root are exported; orphans are ignored.

use crate::document::{BunchRecord, LayerRecord, MapDocument, TableIndex, BUNCH_TABLE, LAYER_TABLE};
use crate::error::{ExportError, RowId};

pub const ROOT_BUNCH_ID: RowId = 1;
pub const ROOT_BUNCH_NAME: &str = "root";

/// Depth-first list of live layers, siblings in document order
pub fn collect_live_layers(document: &MapDocument) -> Result<Vec<LayerRecord>, ExportError> {
    let layers = document.index(LAYER_TABLE)?;
    let bunches = document.index(BUNCH_TABLE)?;

    let root: BunchRecord = bunches.fetch(ROOT_BUNCH_ID)?;
    if root.name.as_deref().is_some_and(|name| name != ROOT_BUNCH_NAME) {
        log::warn!("Root bunch {} is named {:?}, expected '{}'", root.id, root.name, ROOT_BUNCH_NAME);
    }

    let mut live = Vec::new();
    let mut path = vec![root.id];
    expand_bunch(&root, &layers, &bunches, &mut path, &mut live)?;
    Ok(live)
}

fn expand_bunch(
    bunch: &BunchRecord,
    layers: &TableIndex<'_>,
    bunches: &TableIndex<'_>,
    path: &mut Vec<RowId>,
    live: &mut Vec<LayerRecord>,
) -> Result<(), ExportError> {
    for &child in &bunch.layers {
        match (layers.count(child), bunches.count(child)) {
            (0, 0) => return Err(ExportError::UnresolvedLayer { id: child }),
            (1, 0) => live.push(layers.fetch(child)?),
            (0, 1) => {
                if path.contains(&child) {
                    return Err(ExportError::LayerCycle { id: child });
                }
                let sub: BunchRecord = bunches.fetch(child)?;
                path.push(child);
                expand_bunch(&sub, layers, bunches, path, live)?;
                path.pop();
            }
            (0, found) => {
                return Err(ExportError::Cardinality { table: BUNCH_TABLE.to_string(), id: child, found })
            }
            (found, 0) => {
                return Err(ExportError::Cardinality { table: LAYER_TABLE.to_string(), id: child, found })
            }
            _ => return Err(ExportError::AmbiguousLayer { id: child }),
        }
    }
    Ok(())
}

//! Error types for the occluder export pipeline
//!
//! Every failure is fatal for the run: the caller gets one of these and no
//! output file is written.

use thiserror::Error;

/// Integer primary key used by every table in a map document
pub type RowId = i64;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("required table '{table}' is missing from the document")]
    MissingTable { table: String },

    #[error("row {id:?} in table '{table}' is malformed: {source}")]
    MalformedRow {
        table: String,
        id: Option<RowId>,
        #[source]
        source: serde_json::Error,
    },

    #[error("layer {layer} ('{name}') has no data reference")]
    MissingDataReference { layer: RowId, name: String },

    #[error("document contains no points, cannot compute map bounds")]
    EmptyMap,

    #[error("expected exactly one row with id {id} in table '{table}', found {found}")]
    Cardinality {
        table: String,
        id: RowId,
        found: usize,
    },

    #[error("polygon {polygon} must reference exactly one figure, found {found}")]
    FigureCount { polygon: RowId, found: usize },

    #[error("layer id {id} resolves to both a layer and a bunch")]
    AmbiguousLayer { id: RowId },

    #[error("layer id {id} resolves to neither a layer nor a bunch")]
    UnresolvedLayer { id: RowId },

    #[error("bunch {id} contains itself")]
    LayerCycle { id: RowId },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Map editor document model
//!
//! A map export is a JSON object with a `tables` mapping from table name to an
//! ordered list of rows. Rows are kept as raw JSON so every table, including
//! ones this crate knows nothing about, can be scanned for points; the tables
//! the pipeline needs are decoded into typed records on lookup.

use crate::draw::geometry::Point;
use crate::error::{ExportError, RowId};
use anyhow::Context;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const LAYER_TABLE: &str = "Layer";
pub const BUNCH_TABLE: &str = "Bunch";
pub const WALL_TABLE: &str = "Wall";
pub const OBSTACLE_TABLE: &str = "Obstacle";
pub const POLYGON_TABLE: &str = "Polygon";
pub const FIGURE_TABLE: &str = "Figure";

/// Tables every map export must carry, even when empty
pub const REQUIRED_TABLES: [&str; 6] =
    [LAYER_TABLE, BUNCH_TABLE, WALL_TABLE, OBSTACLE_TABLE, POLYGON_TABLE, FIGURE_TABLE];

/// Parsed map export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapDocument {
    pub tables: IndexMap<String, Vec<Value>>,
}

/// Hierarchy node that references one feature row
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerRecord {
    pub id: RowId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Option<RowId>,
}

/// Hierarchy node grouping child layers and bunches
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BunchRecord {
    pub id: RowId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub layers: Vec<RowId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WallRecord {
    pub id: RowId,
    pub points: Vec<Point>,
    pub thickness: f64,
}

/// Placed object (door, tree, column) anchored at `begin`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObstacleRecord {
    pub id: RowId,
    pub begin: Point,
    /// Degrees
    #[serde(default)]
    pub angle: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolygonRecord {
    pub id: RowId,
    #[serde(default)]
    pub figures: Vec<RowId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FigureRecord {
    pub id: RowId,
    pub points: Vec<Point>,
}

impl MapDocument {
    pub fn from_value(value: Value) -> Result<Self, ExportError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Rows of a required table
    pub fn table(&self, name: &str) -> Result<&[Value], ExportError> {
        self.tables
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ExportError::MissingTable { table: name.to_string() })
    }

    /// Fails on the first required table the export lacks
    pub fn require_tables(&self) -> Result<(), ExportError> {
        match REQUIRED_TABLES.into_iter().find(|name| !self.tables.contains_key(*name)) {
            Some(table) => Err(ExportError::MissingTable { table: table.to_string() }),
            None => Ok(()),
        }
    }

    /// Id index over a required table
    pub fn index(&self, name: &'static str) -> Result<TableIndex<'_>, ExportError> {
        Ok(TableIndex::new(name, self.table(name)?))
    }

    /// Pretty JSON dump with row keys sorted, for inspecting an export
    pub fn to_pretty_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Reads and parses a map export from disk
pub fn load_document<P: AsRef<Path>>(path: P) -> anyhow::Result<MapDocument> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open map file {}", path.display()))?;
    let document = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse map file {}", path.display()))?;
    Ok(document)
}

pub fn row_id(row: &Value) -> Option<RowId> {
    row.get("id").and_then(Value::as_i64)
}

/// Decode a raw row into a typed record
pub fn decode_row<T: DeserializeOwned>(table: &str, row: &Value) -> Result<T, ExportError> {
    T::deserialize(row).map_err(|source| ExportError::MalformedRow {
        table: table.to_string(),
        id: row_id(row),
        source,
    })
}

/// The row's `points` list, if it has one
pub fn row_points(table: &str, row: &Value) -> Result<Option<Vec<Point>>, ExportError> {
    match row.get("points") {
        None | Some(Value::Null) => Ok(None),
        Some(points) => Vec::<Point>::deserialize(points)
            .map(Some)
            .map_err(|source| ExportError::MalformedRow {
                table: table.to_string(),
                id: row_id(row),
                source,
            }),
    }
}

/// Rows of one table grouped by id, so lookups can tell "missing" from
/// "duplicated". Rows without an integer id cannot be referenced and are
/// left out.
#[derive(Debug)]
pub struct TableIndex<'a> {
    table: &'static str,
    rows: IndexMap<RowId, Vec<&'a Value>>,
}

impl<'a> TableIndex<'a> {
    pub fn new(table: &'static str, rows: &'a [Value]) -> Self {
        let mut grouped: IndexMap<RowId, Vec<&'a Value>> = IndexMap::new();
        for row in rows {
            if let Some(id) = row_id(row) {
                grouped.entry(id).or_default().push(row);
            }
        }
        Self { table, rows: grouped }
    }

    pub fn count(&self, id: RowId) -> usize {
        self.rows.get(&id).map_or(0, Vec::len)
    }

    /// The single row with this id
    pub fn get(&self, id: RowId) -> Result<&'a Value, ExportError> {
        match self.rows.get(&id).map(Vec::as_slice) {
            Some([row]) => Ok(*row),
            other => Err(ExportError::Cardinality {
                table: self.table.to_string(),
                id,
                found: other.map_or(0, |rows| rows.len()),
            }),
        }
    }

    pub fn fetch<T: DeserializeOwned>(&self, id: RowId) -> Result<T, ExportError> {
        decode_row(self.table, self.get(id)?)
    }
}

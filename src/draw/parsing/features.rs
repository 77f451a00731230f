//! Feature classification
//!
//! A live layer's name decides what kind of map feature it is. Each kind is one
//! entry in [`FEATURE_RULES`]: a name predicate, the table `layer.data` points
//! into, and a resolver that decodes that row into a [`Feature`].

use crate::config::RenderOptions;
use crate::document::{
    decode_row, FigureRecord, LayerRecord, MapDocument, ObstacleRecord, PolygonRecord, TableIndex,
    WallRecord, FIGURE_TABLE, OBSTACLE_TABLE, POLYGON_TABLE, WALL_TABLE,
};
use crate::error::ExportError;
use indexmap::IndexMap;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Wall,
    Door,
    Secret,
    Tree,
    Column,
    Terrain,
}

impl FeatureKind {
    /// Output order of the occluder groups
    pub const ALL: [FeatureKind; 6] = [
        FeatureKind::Wall,
        FeatureKind::Door,
        FeatureKind::Secret,
        FeatureKind::Tree,
        FeatureKind::Column,
        FeatureKind::Terrain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::Wall => "wall",
            FeatureKind::Door => "door",
            FeatureKind::Secret => "secret",
            FeatureKind::Tree => "tree",
            FeatureKind::Column => "column",
            FeatureKind::Terrain => "terrain",
        }
    }

    pub fn is_enabled(self, options: &RenderOptions) -> bool {
        match self {
            FeatureKind::Wall | FeatureKind::Door | FeatureKind::Secret => true,
            FeatureKind::Tree | FeatureKind::Column => options.include_props,
            FeatureKind::Terrain => options.include_terrain,
        }
    }
}

/// Tree size flags read off the layer name.
///
/// Each flag is a separate substring test, so a name can carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeTiers {
    pub small: bool,
    pub mid: bool,
    pub big: bool,
}

impl TreeTiers {
    pub fn from_name(name: &str) -> Self {
        Self {
            small: name.contains("small"),
            mid: name.contains("mid"),
            big: name.contains("big"),
        }
    }

    /// Canopy radius for an obstacle of the given scale
    pub fn radius(&self, scale: f64) -> f64 {
        let mut radius = scale / 4.0;
        if self.small {
            radius /= 2.0;
        }
        if self.mid {
            radius /= 1.5;
        }
        radius
    }
}

/// A live layer joined with the row it references
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Wall(WallRecord),
    Door { obstacle: ObstacleRecord, double: bool },
    Secret(WallRecord),
    Tree { obstacle: ObstacleRecord, tiers: TreeTiers },
    Column(ObstacleRecord),
    Terrain(FigureRecord),
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::Wall(_) => FeatureKind::Wall,
            Feature::Door { .. } => FeatureKind::Door,
            Feature::Secret(_) => FeatureKind::Secret,
            Feature::Tree { .. } => FeatureKind::Tree,
            Feature::Column(_) => FeatureKind::Column,
            Feature::Terrain(_) => FeatureKind::Terrain,
        }
    }
}

/// Id indexes over the feature tables
pub struct FeatureTables<'a> {
    indexes: IndexMap<&'static str, TableIndex<'a>>,
}

impl<'a> FeatureTables<'a> {
    pub fn new(document: &'a MapDocument) -> Result<Self, ExportError> {
        let indexes: IndexMap<_, _> = [WALL_TABLE, OBSTACLE_TABLE, POLYGON_TABLE, FIGURE_TABLE]
            .into_iter()
            .map(|name| document.index(name).map(|index| (name, index)))
            .collect::<Result<_, _>>()?;
        Ok(Self { indexes })
    }

    pub fn index(&self, table: &'static str) -> Result<&TableIndex<'a>, ExportError> {
        self.indexes
            .get(table)
            .ok_or_else(|| ExportError::MissingTable { table: table.to_string() })
    }
}

type Resolver = fn(&FeatureTables<'_>, &LayerRecord, &Value) -> Result<Feature, ExportError>;

pub struct FeatureRule {
    pub kind: FeatureKind,
    pub matches: fn(&str) -> bool,
    pub table: &'static str,
    pub resolve: Resolver,
}

pub const FEATURE_RULES: [FeatureRule; 6] = [
    FeatureRule {
        kind: FeatureKind::Wall,
        matches: |name| name.starts_with("wall"),
        table: WALL_TABLE,
        resolve: |_, _, row| Ok(Feature::Wall(decode_row(WALL_TABLE, row)?)),
    },
    FeatureRule {
        kind: FeatureKind::Door,
        matches: |name| name.contains("door"),
        table: OBSTACLE_TABLE,
        resolve: |_, layer, row| {
            Ok(Feature::Door {
                obstacle: decode_row(OBSTACLE_TABLE, row)?,
                double: layer.name.contains("double"),
            })
        },
    },
    FeatureRule {
        kind: FeatureKind::Secret,
        matches: |name| name.starts_with("secret") || name.starts_with("Secret"),
        table: WALL_TABLE,
        resolve: |_, _, row| Ok(Feature::Secret(decode_row(WALL_TABLE, row)?)),
    },
    FeatureRule {
        kind: FeatureKind::Tree,
        matches: |name| name.contains("tree"),
        table: OBSTACLE_TABLE,
        resolve: |_, layer, row| {
            Ok(Feature::Tree {
                obstacle: decode_row(OBSTACLE_TABLE, row)?,
                tiers: TreeTiers::from_name(&layer.name),
            })
        },
    },
    FeatureRule {
        kind: FeatureKind::Column,
        matches: |name| name.contains("column"),
        table: OBSTACLE_TABLE,
        resolve: |_, _, row| Ok(Feature::Column(decode_row(OBSTACLE_TABLE, row)?)),
    },
    FeatureRule {
        kind: FeatureKind::Terrain,
        matches: |name| name.starts_with("terrain"),
        table: POLYGON_TABLE,
        resolve: resolve_terrain,
    },
];

fn resolve_terrain(tables: &FeatureTables<'_>, _: &LayerRecord, row: &Value) -> Result<Feature, ExportError> {
    let polygon: PolygonRecord = decode_row(POLYGON_TABLE, row)?;
    let figure_id = match polygon.figures.as_slice() {
        [figure_id] => *figure_id,
        figures => {
            return Err(ExportError::FigureCount { polygon: polygon.id, found: figures.len() });
        }
    };
    Ok(Feature::Terrain(tables.index(FIGURE_TABLE)?.fetch(figure_id)?))
}

/// Live layers sorted into features, in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedFeatures {
    features: Vec<Feature>,
}

impl ClassifiedFeatures {
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn of_kind(&self, kind: FeatureKind) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter().filter(move |feature| feature.kind() == kind)
    }

    pub fn count(&self, kind: FeatureKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Match every live layer against the rule table and fetch its rows.
///
/// A layer is tested against every rule, so a name like "tree_door" lands in
/// both lists. Rules for disabled kinds are skipped before any lookup.
pub fn classify_layers(
    document: &MapDocument,
    live_layers: &[LayerRecord],
    options: &RenderOptions,
) -> Result<ClassifiedFeatures, ExportError> {
    let tables = FeatureTables::new(document)?;
    let mut classified = ClassifiedFeatures::default();

    for layer in live_layers {
        let mut matched = 0;
        for rule in &FEATURE_RULES {
            if !(rule.matches)(&layer.name) {
                continue;
            }
            matched += 1;

            if !rule.kind.is_enabled(options) {
                log::debug!("Skipping {} layer {} ('{}'): disabled", rule.kind.name(), layer.id, layer.name);
                continue;
            }

            let data = layer.data.ok_or_else(|| ExportError::MissingDataReference {
                layer: layer.id,
                name: layer.name.clone(),
            })?;
            let row = tables.index(rule.table)?.get(data)?;
            classified.push((rule.resolve)(&tables, layer, row)?);
        }

        match matched {
            0 => log::debug!("Layer {} ('{}') matches no feature kind", layer.id, layer.name),
            1 => {}
            n => log::warn!("Layer {} ('{}') matches {} feature kinds", layer.id, layer.name, n),
        }
    }

    for kind in FeatureKind::ALL {
        log::debug!("Classified {} {} feature(s)", classified.count(kind), kind.name());
    }

    Ok(classified)
}

// Fatal error paths: each run must fail outright and never leave output behind
mod common;

use common::map_with_layers;
use dps_occluders::{convert_document, export_file, ExportError, MapDocument, RenderOptions};
use serde_json::json;
use std::fs;

fn wall_table() -> serde_json::Value {
    json!([{ "id": 100, "points": [{ "x": 0, "y": 0 }, { "x": 4, "y": 0 }], "thickness": 2 }])
}

#[test]
fn test_dangling_data_reference_fails() {
    let doc = map_with_layers(
        json!([{ "id": 10, "name": "wall1", "data": 555 }]),
        json!({ "Wall": wall_table() }),
    );
    let err = convert_document(&doc, &RenderOptions::default()).unwrap_err();
    assert!(
        matches!(err, ExportError::Cardinality { ref table, id: 555, found: 0 } if table == "Wall"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_duplicate_rows_fail() {
    let walls = json!([
        { "id": 100, "points": [{ "x": 0, "y": 0 }, { "x": 4, "y": 0 }], "thickness": 2 },
        { "id": 100, "points": [{ "x": 1, "y": 1 }, { "x": 2, "y": 2 }], "thickness": 2 }
    ]);
    let doc = map_with_layers(json!([{ "id": 10, "name": "wall1", "data": 100 }]), json!({ "Wall": walls }));
    assert!(matches!(
        convert_document(&doc, &RenderOptions::default()),
        Err(ExportError::Cardinality { id: 100, found: 2, .. })
    ));
}

#[test]
fn test_failed_export_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("broken.xml");

    let document = json!({
        "tables": {
            "Bunch": [{ "id": 1, "name": "root", "layers": [10] }],
            "Layer": [{ "id": 10, "name": "door", "data": 7 }],
            "Wall": wall_table(),
            "Obstacle": [],
            "Polygon": [],
            "Figure": []
        }
    });
    fs::write(&input, serde_json::to_string(&document).unwrap()).unwrap();

    let err = export_file(&input, &output, &RenderOptions::default()).unwrap_err();
    let cause = err.downcast_ref::<ExportError>().expect("export error in the chain");
    assert!(matches!(cause, ExportError::Cardinality { id: 7, .. }));
    assert!(!output.exists());
}

#[test]
fn test_missing_root_bunch_fails() {
    let doc = MapDocument::from_value(json!({
        "tables": {
            "Bunch": [{ "id": 2, "name": "group", "layers": [] }],
            "Layer": [],
            "Wall": wall_table(),
            "Obstacle": [],
            "Polygon": [],
            "Figure": []
        }
    }))
    .unwrap();
    assert!(matches!(
        convert_document(&doc, &RenderOptions::default()),
        Err(ExportError::Cardinality { id: 1, found: 0, .. })
    ));
}

#[test]
fn test_missing_layer_table_fails() {
    let doc = MapDocument::from_value(json!({
        "tables": {
            "Bunch": [{ "id": 1, "name": "root", "layers": [] }],
            "Wall": wall_table()
        }
    }))
    .unwrap();
    assert!(matches!(
        convert_document(&doc, &RenderOptions::default()),
        Err(ExportError::MissingTable { table }) if table == "Layer"
    ));
}

#[test]
fn test_missing_obstacle_table_fails() {
    let doc = MapDocument::from_value(json!({
        "tables": {
            "Bunch": [{ "id": 1, "name": "root", "layers": [10] }],
            "Layer": [{ "id": 10, "name": "wall1", "data": 100 }],
            "Wall": wall_table(),
            "Polygon": [],
            "Figure": []
        }
    }))
    .unwrap();
    assert!(matches!(
        convert_document(&doc, &RenderOptions::default()),
        Err(ExportError::MissingTable { table }) if table == "Obstacle"
    ));
}

#[test]
fn test_layer_and_bunch_sharing_an_id_fails() {
    let doc = MapDocument::from_value(json!({
        "tables": {
            "Bunch": [{ "id": 1, "layers": [10] }, { "id": 10, "layers": [] }],
            "Layer": [{ "id": 10, "name": "wall1", "data": 100 }],
            "Wall": wall_table(),
            "Obstacle": [],
            "Polygon": [],
            "Figure": []
        }
    }))
    .unwrap();
    assert!(matches!(
        convert_document(&doc, &RenderOptions::default()),
        Err(ExportError::AmbiguousLayer { id: 10 })
    ));
}

#[test]
fn test_negative_thickness_fails_before_reading() {
    let options = RenderOptions { thickness_factor: -1.0, ..Default::default() };
    let err = convert_document(&MapDocument::default(), &options).unwrap_err();
    assert!(matches!(err, ExportError::Config(_)));
}

#[test]
fn test_map_without_points_fails() {
    let doc = map_with_layers(json!([]), json!({}));
    assert!(matches!(
        convert_document(&doc, &RenderOptions::default()),
        Err(ExportError::EmptyMap)
    ));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.xml");
    assert!(export_file(&dir.path().join("nope.json"), &output, &RenderOptions::default()).is_err());
    assert!(!output.exists());
}

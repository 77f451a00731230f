// Shared helpers for the integration tests
#![allow(dead_code)]

use dps_occluders::MapDocument;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{json, Value};

pub const FIXTURE: &str = "tests/fixtures/two_rooms.json";

/// One `<occluder>` read back from the output
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedOccluder {
    pub id: u32,
    pub coords: Vec<f64>,
    pub tags: Vec<String>,
}

impl ParsedOccluder {
    pub fn point_count(&self) -> usize {
        self.coords.len() / 2
    }
}

pub fn read_occluders(xml: &str) -> Vec<ParsedOccluder> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut occluders = Vec::new();
    let mut current: Option<ParsedOccluder> = None;
    let mut element = String::new();

    loop {
        match reader.read_event().expect("output should be well-formed XML") {
            Event::Start(start) => {
                element = String::from_utf8_lossy(start.name().as_ref()).to_string();
                if element == "occluder" {
                    current = Some(ParsedOccluder::default());
                }
            }
            Event::Text(text) => {
                let value = text.unescape().expect("text should unescape").to_string();
                if let Some(occluder) = current.as_mut() {
                    match element.as_str() {
                        "id" => occluder.id = value.parse().expect("numeric id"),
                        "points" => {
                            occluder.coords = value.split(',').map(|v| v.parse().expect("numeric coordinate")).collect()
                        }
                        "door" | "secret" | "terrain" => {
                            assert_eq!(value, "true");
                            occluder.tags.push(element.clone());
                        }
                        other => panic!("unexpected element <{}>", other),
                    }
                }
            }
            Event::End(end) => {
                if end.name().as_ref() == b"occluder" {
                    occluders.push(current.take().expect("closing an open occluder"));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    occluders
}

/// Root bunch holding the given layers, plus whatever feature tables are passed
pub fn map_with_layers(layers: Value, mut tables: Value) -> MapDocument {
    let ids: Vec<Value> = layers
        .as_array()
        .expect("layer list")
        .iter()
        .map(|layer| layer["id"].clone())
        .collect();

    let map = tables.as_object_mut().expect("table map");
    map.insert("Layer".to_string(), layers);
    map.insert("Bunch".to_string(), json!([{ "id": 1, "name": "root", "layers": ids }]));
    for table in ["Wall", "Obstacle", "Polygon", "Figure"] {
        map.entry(table).or_insert_with(|| json!([]));
    }

    MapDocument::from_value(json!({ "tables": tables })).expect("valid document")
}

//! XML serialization of occluders
//!
//! Writes the occluder list in the layout the lighting renderer reads: one
//! element per line, no indentation, points projected into pixel space and
//! fixed to two decimals.

use crate::draw::geometry::{Occluder, Point, Projection};
use crate::error::ExportError;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{self, Write};

/// Serializes occluders into a complete XML document string
pub fn occluders_to_xml(occluders: &[Occluder], projection: &Projection) -> Result<String, ExportError> {
    let buffer = write_occluders(Vec::with_capacity(occluders.len() * 128), occluders, projection)?;
    String::from_utf8(buffer).map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Streams the occluder document into `sink` and hands it back
pub fn write_occluders<W: Write>(
    sink: W,
    occluders: &[Occluder],
    projection: &Projection,
) -> Result<W, ExportError> {
    let mut writer = Writer::new(sink);

    write_open(&mut writer, "root")?;
    write_open(&mut writer, "occluders")?;
    for occluder in occluders {
        write_occluder(&mut writer, occluder, projection)?;
    }
    write_close(&mut writer, "occluders")?;
    write_close(&mut writer, "root")?;

    Ok(writer.into_inner())
}

/// Comma-separated `x,y` pairs in pixel space
pub fn format_points(points: &[Point], projection: &Projection) -> String {
    points
        .iter()
        .map(|&p| {
            let px = projection.project(p);
            format!("{:.2},{:.2}", px.x, px.y)
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn write_occluder<W: Write>(
    writer: &mut Writer<W>,
    occluder: &Occluder,
    projection: &Projection,
) -> Result<(), ExportError> {
    write_open(writer, "occluder")?;
    write_text_element(writer, "id", &occluder.id.to_string())?;
    write_text_element(writer, "points", &format_points(&occluder.points, projection))?;
    if let Some(tag) = occluder.tag {
        write_text_element(writer, tag.element_name(), "true")?;
    }
    write_close(writer, "occluder")
}

fn write_open<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), ExportError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    write_newline(writer)
}

fn write_close<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), ExportError> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    write_newline(writer)
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), ExportError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    write_newline(writer)
}

fn write_newline<W: Write>(writer: &mut Writer<W>) -> Result<(), ExportError> {
    writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
    Ok(())
}

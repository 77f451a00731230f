//! Map document to occluder XML
//!
//! `convert_document` is the whole pipeline as a pure function: every piece of
//! run state (bounds, feature lists, the id counter) is created inside the
//! call, so converting the same document twice yields identical output.

use crate::config::RenderOptions;
use crate::document::{load_document, MapDocument};
use crate::draw::generation::generate_occluders;
use crate::draw::geometry::Projection;
use crate::draw::parsing::{classify_layers, index_document};
use crate::error::ExportError;
use crate::serialize_xml::occluders_to_xml;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

pub fn convert_document(document: &MapDocument, options: &RenderOptions) -> Result<String, ExportError> {
    options.validate()?;

    let index_start = Instant::now();
    let index = index_document(document)?;
    let index_time = index_start.elapsed();

    let classify_start = Instant::now();
    let features = classify_layers(document, &index.live_layers, options)?;
    let classify_time = classify_start.elapsed();

    let generate_start = Instant::now();
    let occluders = generate_occluders(&features, &index.bounds, options);
    let generate_time = generate_start.elapsed();

    let projection = Projection::new(&index.bounds, options);
    let xml = occluders_to_xml(&occluders, &projection)?;

    log::debug!(
        "Timing: index {:.2}ms, classify {:.2}ms, generate {:.2}ms",
        index_time.as_secs_f64() * 1000.0,
        classify_time.as_secs_f64() * 1000.0,
        generate_time.as_secs_f64() * 1000.0,
    );

    Ok(xml)
}

/// Convert `input` and write the XML to `output`.
///
/// The file is only created once the whole document has converted, so a
/// failed run leaves nothing behind.
pub fn export_file(input: &Path, output: &Path, options: &RenderOptions) -> anyhow::Result<()> {
    let document = load_document(input)?;
    let xml = convert_document(&document, options)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(xml.as_bytes()).context("Failed to write occluder XML")?;
    writer.flush().context("Failed to flush occluder XML")?;

    log::info!("Wrote {}", output.display());
    Ok(())
}

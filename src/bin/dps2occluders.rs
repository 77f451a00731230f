//! Command-line converter from map editor exports to occluder XML
//!
//! Usage:
//!   dps2occluders <input> [output] [options]
//!
//! Set `RUST_LOG=debug` for per-stage counts and timings.

use anyhow::Result;
use clap::Parser;
use dps_occluders::config::DEFAULT_RATIO;
use dps_occluders::{export_file, load_document, resolve_output_path, RenderOptions};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dps2occluders", version, about = "Export map walls, doors and props as light occluders")]
struct Args {
    /// Map editor export (JSON)
    input: PathBuf,

    /// Output XML file
    output: Option<PathBuf>,

    /// Write `<input stem>.xml` into this folder when no output file is given
    #[arg(short = 'o', long)]
    output_folder: Option<PathBuf>,

    /// Pixels per map square
    #[arg(short, long, default_value_t = DEFAULT_RATIO)]
    ratio: f64,

    /// Wall thickness multiplier; 0 draws walls as thin lines
    #[arg(short, long = "thickness", default_value_t = 1.0)]
    thickness_factor: f64,

    /// Horizontal pixel offset applied after scaling
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    shift_x: f64,

    /// Vertical pixel offset applied after scaling
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    shift_y: f64,

    /// Export trees and columns
    #[arg(short, long)]
    props: bool,

    /// Export terrain polygons
    #[arg(long)]
    terrain: bool,

    /// Print the parsed document and exit
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.debug {
        let document = load_document(&args.input)?;
        println!("{}", document.to_pretty_json()?);
        return Ok(());
    }

    let options = RenderOptions {
        ratio: args.ratio,
        thickness_factor: args.thickness_factor,
        shift_x: args.shift_x,
        shift_y: args.shift_y,
        include_props: args.props,
        include_terrain: args.terrain,
    };
    options.validate()?;

    let output = resolve_output_path(&args.input, args.output.as_deref(), args.output_folder.as_deref())?;
    info!("Processing {} -> {}", args.input.display(), output.display());

    export_file(&args.input, &output, &options)
}

//! Rendering options and output path resolution

use crate::error::ExportError;
use std::path::{Path, PathBuf};

/// Pixels per map unit when none is given
pub const DEFAULT_RATIO: f64 = 100.0;

/// Options controlling how map geometry is turned into occluders
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Pixels per map unit
    pub ratio: f64,
    /// Multiplier on wall/door/secret half-widths; 0 draws walls as thin polylines
    pub thickness_factor: f64,
    pub shift_x: f64,
    pub shift_y: f64,
    /// Emit trees and columns
    pub include_props: bool,
    /// Emit terrain polygons
    pub include_terrain: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            thickness_factor: 1.0,
            shift_x: 0.0,
            shift_y: 0.0,
            include_props: false,
            include_terrain: false,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.thickness_factor.is_finite() || self.thickness_factor < 0.0 {
            return Err(ExportError::Config(format!(
                "thickness factor must be a non-negative number, got {}",
                self.thickness_factor
            )));
        }
        if !self.ratio.is_finite() {
            return Err(ExportError::Config(format!("ratio must be finite, got {}", self.ratio)));
        }
        if !self.shift_x.is_finite() || !self.shift_y.is_finite() {
            return Err(ExportError::Config(format!(
                "shift must be finite, got ({}, {})",
                self.shift_x, self.shift_y
            )));
        }
        Ok(())
    }

    /// Thin mode draws walls and secrets as their raw polyline
    pub fn is_thin(&self) -> bool {
        self.thickness_factor == 0.0
    }
}

/// Pick the destination file for a conversion.
///
/// An explicit `output` wins. Otherwise the file lands in `output_folder`,
/// named after the input's stem with an `.xml` extension.
pub fn resolve_output_path(
    input: &Path,
    output: Option<&Path>,
    output_folder: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let folder = output_folder.ok_or_else(|| {
        ExportError::Config("either an output path or an output folder is required".to_string())
    })?;

    let stem = input.file_stem().ok_or_else(|| {
        ExportError::Config(format!("cannot derive an output name from '{}'", input.display()))
    })?;

    Ok(folder.join(stem).with_extension("xml"))
}

//! One file per marker, sized to the marker itself.

use std::fs;
use std::path::{Path, PathBuf};

use coded_targets_codes::RingCode;
use coded_targets_core::{coded_marker, marker_size, Canvas, RingGeometry};
use nalgebra::Point2;

use crate::error::PrintError;
use crate::render::{write_canvas, DocumentFormat};

/// Inputs to [`export_single_targets`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleTargetSpec {
    pub dot_radius_mm: f64,
    pub bits: u32,
    pub ring: RingGeometry,
    pub format: DocumentFormat,
    /// Only used for PNG.
    pub dpi: u32,
}

/// A `6 * dot_radius` square canvas with the marker at its centre and no label.
pub fn single_target_canvas(
    code: RingCode,
    dot_radius_mm: f64,
    ring: &RingGeometry,
) -> Canvas {
    let mut canvas = Canvas::centered(marker_size(dot_radius_mm));
    canvas.extend(coded_marker(Point2::origin(), dot_radius_mm, code, ring));
    canvas
}

/// File name for the marker at 0-based `index`.
pub fn target_file_name(index: usize, format: DocumentFormat) -> String {
    format!("target_{}.{}", index + 1, format.extension())
}

/// Write `target_1.<ext>`, `target_2.<ext>`, ... into `dir`, one per code.
///
/// Returns the written paths in code order.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "info", skip(codes, spec), fields(count = codes.len())))]
pub fn export_single_targets(
    codes: &[u32],
    spec: &SingleTargetSpec,
    dir: &Path,
) -> Result<Vec<PathBuf>, PrintError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(codes.len());
    for (index, &value) in codes.iter().enumerate() {
        let code = RingCode::new(value, spec.bits)?;
        let canvas = single_target_canvas(code, spec.dot_radius_mm, &spec.ring);
        let path = dir.join(target_file_name(index, spec.format));
        write_canvas(&canvas, &path, spec.format, spec.dpi)?;
        log::debug!("wrote target {} (code {}) to {}", index + 1, value, path.display());
        written.push(path);
    }
    Ok(written)
}

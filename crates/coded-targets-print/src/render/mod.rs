//! Rendering adapters from [`Canvas`] to output files.
//!
//! Every backend reads the same y-up millimetre frame, so a marker drawn on
//! the combined page and in its standalone file is identical.

mod pdf;
mod raster;
mod svg;

use std::fs;
use std::path::Path;

use coded_targets_core::Canvas;
use serde::{Deserialize, Serialize};

use crate::error::PrintError;

pub use self::pdf::PdfRenderer;
pub use self::raster::PngRenderer;
pub use self::svg::{render_svg, SvgRenderer};

/// Output file formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Svg,
    Pdf,
    Png,
}

impl DocumentFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, PrintError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(Self::Svg),
            Some("pdf") => Ok(Self::Pdf),
            Some("png") => Ok(Self::Png),
            _ => Err(PrintError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Png => "png",
        }
    }

    /// True for formats that keep shapes as vectors.
    #[inline]
    pub fn is_vector(self) -> bool {
        !matches!(self, Self::Png)
    }
}

/// Angles from `start` to `end` (inclusive) in equal steps no larger than `max_step`.
pub(crate) fn arc_angles(start_deg: f64, end_deg: f64, max_step_deg: f64) -> Vec<f64> {
    let sweep = end_deg - start_deg;
    let steps = (sweep.abs() / max_step_deg).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| start_deg + sweep * i as f64 / steps as f64)
        .collect()
}

/// A backend that writes a canvas to a file.
pub trait CanvasRenderer {
    fn write(&self, canvas: &Canvas, path: &Path) -> Result<(), PrintError>;
}

/// Write `canvas` to `path` in `format`; `dpi` only matters for PNG.
pub fn write_canvas(
    canvas: &Canvas,
    path: &Path,
    format: DocumentFormat,
    dpi: u32,
) -> Result<(), PrintError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    match format {
        DocumentFormat::Svg => SvgRenderer.write(canvas, path),
        DocumentFormat::Pdf => PdfRenderer.write(canvas, path),
        DocumentFormat::Png => PngRenderer { dpi }.write(canvas, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.PDF")).expect("pdf"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("page.svg")).expect("svg"),
            DocumentFormat::Svg
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("page.png")).expect("png"),
            DocumentFormat::Png
        );
    }

    #[test]
    fn arc_angles_cover_sweep() {
        assert_eq!(arc_angles(0.0, 45.0, 90.0), vec![0.0, 45.0]);
        assert_eq!(arc_angles(0.0, 360.0, 90.0).len(), 5);
        let back = arc_angles(90.0, 0.0, 30.0);
        assert_eq!(back, vec![90.0, 60.0, 30.0, 0.0]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        match DocumentFormat::from_path(Path::new("page.eps")) {
            Err(PrintError::UnsupportedFormat(p)) => assert_eq!(p, PathBuf::from("page.eps")),
            other => panic!("unexpected {other:?}"),
        }
        assert!(DocumentFormat::from_path(Path::new("noext")).is_err());
    }
}

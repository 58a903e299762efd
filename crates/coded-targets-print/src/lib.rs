//! Printable output for circular coded targets.
//!
//! A run goes through [`generate`]:
//!
//! 1. [`TargetConfig::validate`] rejects bad settings before any file is touched;
//! 2. codes come from the cached rotation-invariant table;
//! 3. [`compose_page`] lays the markers out on a grid with index labels and a
//!    calibration scale;
//! 4. the page is written as SVG, PDF or PNG (chosen by extension) and each
//!    marker is exported on its own to `target_<n>.<ext>`;
//! 5. an optional JSON manifest records codes and page positions.
//!
//! ```no_run
//! use coded_targets_print::{generate, TargetConfig};
//!
//! # fn main() -> Result<(), coded_targets_print::PrintError> {
//! let cfg = TargetConfig {
//!     bits: 12,
//!     markers_total: 40,
//!     ..TargetConfig::default()
//! };
//! let report = generate(&cfg)?;
//! println!("placed {} markers", report.markers.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod export;
mod generate;
mod layout;
mod render;
mod report;

pub use config::{
    ConfigError, OverlapWarning, TargetConfig, DEFAULT_BITS, DEFAULT_CAL_DOT_RADIUS_MM,
    DEFAULT_CAL_DOT_SPACING_MM, DEFAULT_CAL_LABEL, DEFAULT_COLUMNS, DEFAULT_DOT_RADIUS_MM,
    DEFAULT_DPI, DEFAULT_MARKERS_TOTAL, DEFAULT_MARKER_PADDING_MM, DEFAULT_OUTPUT_DIR,
    DEFAULT_OUTPUT_DOCUMENT, DEFAULT_PAGE_MARGIN_MM,
};
pub use error::PrintError;
pub use export::{export_single_targets, single_target_canvas, target_file_name, SingleTargetSpec};
pub use generate::generate;
pub use layout::{
    compose_page, CalibrationSpec, ComposedPage, PageLayout, PageSpec, PlacedMarker,
    CAL_POSITION_Y_MULTIPLIER,
};
pub use render::{
    render_svg, write_canvas, CanvasRenderer, DocumentFormat, PdfRenderer, PngRenderer,
    SvgRenderer,
};
pub use report::{GenerationReport, ManifestEntry};

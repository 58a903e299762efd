use std::path::PathBuf;

use coded_targets_codes::CodeError;

use crate::config::ConfigError;

/// Errors returned while composing or writing targets.
#[derive(thiserror::Error, Debug)]
pub enum PrintError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("pdf output failed: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("unsupported output format for {}: expected .svg, .pdf or .png", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("raster of {width}x{height} px is too large; lower the dpi")]
    RasterTooLarge { width: u64, height: u64 },
}

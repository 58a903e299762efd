//! Generation settings, their validation and JSON persistence.

use std::fs;
use std::path::{Path, PathBuf};

use coded_targets_codes::{MAX_BITS, MIN_BITS};
use coded_targets_core::{marker_size, GeometryError, RingGeometry};
use serde::{Deserialize, Serialize};

use crate::error::PrintError;
use crate::layout::{CalibrationSpec, PageSpec};
use crate::render::DocumentFormat;

pub const DEFAULT_DOT_RADIUS_MM: f64 = 3.0;
pub const DEFAULT_BITS: u32 = 8;
pub const DEFAULT_COLUMNS: usize = 4;
pub const DEFAULT_MARKERS_TOTAL: usize = 12;
pub const DEFAULT_DPI: u32 = 300;
pub const DEFAULT_PAGE_MARGIN_MM: f64 = 10.0;
pub const DEFAULT_MARKER_PADDING_MM: f64 = 5.0;
pub const DEFAULT_CAL_DOT_RADIUS_MM: f64 = 2.0;
pub const DEFAULT_CAL_DOT_SPACING_MM: f64 = 20.0;
pub const DEFAULT_CAL_LABEL: &str = "20.00 mm calibration reference";
pub const DEFAULT_OUTPUT_DOCUMENT: &str = "coded_markers_6mm.pdf";
pub const DEFAULT_OUTPUT_DIR: &str = "targets";

/// Configuration rejected before any output is written.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("dot radius must be positive (got {0} mm)")]
    InvalidDotRadius(f64),
    #[error("bits must be between {MIN_BITS} and {MAX_BITS} (got {0})")]
    BitsOutOfRange(u32),
    #[error("columns must be at least 1")]
    InvalidColumns,
    #[error("markers total must be at least 1")]
    InvalidMarkerCount,
    #[error("page margin must be non-negative (got {0} mm)")]
    NegativeMargin(f64),
    #[error("marker padding must be non-negative (got {0} mm)")]
    NegativePadding(f64),
    #[error("calibration dot spacing must be positive (got {0} mm)")]
    InvalidCalibrationSpacing(f64),
    #[error("calibration dot radius must be positive (got {0} mm)")]
    InvalidCalibrationRadius(f64),
    #[error("dpi must be at least 1")]
    InvalidDpi,
    #[error(transparent)]
    Ring(#[from] GeometryError),
    #[error("markers total ({requested}) exceeds maximum codes ({max_codes}) for {bits} bits")]
    TooManyMarkers {
        requested: usize,
        max_codes: u64,
        bits: u32,
    },
}

/// Non-fatal: neighbouring markers may touch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlapWarning {
    pub padding_mm: f64,
    pub marker_radius_mm: f64,
}

impl OverlapWarning {
    #[inline]
    pub fn min_padding_mm(&self) -> f64 {
        self.marker_radius_mm * 2.0
    }
}

impl std::fmt::Display for OverlapWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "marker padding ({}mm) may be insufficient: marker radius is {:.2}mm, \
             minimum padding should be {:.2}mm to prevent overlap",
            self.padding_mm,
            self.marker_radius_mm,
            self.min_padding_mm()
        )
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn default_dot_radius() -> f64 {
    DEFAULT_DOT_RADIUS_MM
}
fn default_bits() -> u32 {
    DEFAULT_BITS
}
fn default_columns() -> usize {
    DEFAULT_COLUMNS
}
fn default_markers_total() -> usize {
    DEFAULT_MARKERS_TOTAL
}
fn default_dpi() -> u32 {
    DEFAULT_DPI
}
fn default_page_margin() -> f64 {
    DEFAULT_PAGE_MARGIN_MM
}
fn default_marker_padding() -> f64 {
    DEFAULT_MARKER_PADDING_MM
}
fn default_cal_dot_radius() -> f64 {
    DEFAULT_CAL_DOT_RADIUS_MM
}
fn default_cal_dot_spacing() -> f64 {
    DEFAULT_CAL_DOT_SPACING_MM
}
fn default_cal_label() -> String {
    DEFAULT_CAL_LABEL.to_owned()
}
fn default_output_document() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DOCUMENT)
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Everything needed for one generation run. Lengths are millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_dot_radius")]
    pub dot_radius_mm: f64,
    #[serde(default = "default_bits")]
    pub bits: u32,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_markers_total")]
    pub markers_total: usize,
    /// Raster density. Never changes physical size.
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default = "default_page_margin")]
    pub page_margin_mm: f64,
    #[serde(default = "default_marker_padding")]
    pub marker_padding_mm: f64,
    #[serde(default = "default_cal_dot_radius")]
    pub cal_dot_radius_mm: f64,
    #[serde(default = "default_cal_dot_spacing")]
    pub cal_dot_spacing_mm: f64,
    #[serde(default = "default_cal_label")]
    pub cal_label: String,
    #[serde(default)]
    pub ring: RingGeometry,
    #[serde(default = "default_output_document")]
    pub output_document: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub target_format: DocumentFormat,
    #[serde(default)]
    pub skip_document: bool,
    #[serde(default)]
    pub skip_targets: bool,
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            dot_radius_mm: DEFAULT_DOT_RADIUS_MM,
            bits: DEFAULT_BITS,
            columns: DEFAULT_COLUMNS,
            markers_total: DEFAULT_MARKERS_TOTAL,
            dpi: DEFAULT_DPI,
            page_margin_mm: DEFAULT_PAGE_MARGIN_MM,
            marker_padding_mm: DEFAULT_MARKER_PADDING_MM,
            cal_dot_radius_mm: DEFAULT_CAL_DOT_RADIUS_MM,
            cal_dot_spacing_mm: DEFAULT_CAL_DOT_SPACING_MM,
            cal_label: default_cal_label(),
            ring: RingGeometry::default(),
            output_document: default_output_document(),
            output_dir: default_output_dir(),
            target_format: DocumentFormat::default(),
            skip_document: false,
            skip_targets: false,
            manifest_path: None,
        }
    }
}

impl TargetConfig {
    /// Check every constraint; the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.dot_radius_mm) {
            return Err(ConfigError::InvalidDotRadius(self.dot_radius_mm));
        }
        if !(MIN_BITS..=MAX_BITS).contains(&self.bits) {
            return Err(ConfigError::BitsOutOfRange(self.bits));
        }
        if self.columns < 1 {
            return Err(ConfigError::InvalidColumns);
        }
        if self.markers_total < 1 {
            return Err(ConfigError::InvalidMarkerCount);
        }
        if !non_negative(self.page_margin_mm) {
            return Err(ConfigError::NegativeMargin(self.page_margin_mm));
        }
        if !non_negative(self.marker_padding_mm) {
            return Err(ConfigError::NegativePadding(self.marker_padding_mm));
        }
        if !positive(self.cal_dot_spacing_mm) {
            return Err(ConfigError::InvalidCalibrationSpacing(
                self.cal_dot_spacing_mm,
            ));
        }
        if !positive(self.cal_dot_radius_mm) {
            return Err(ConfigError::InvalidCalibrationRadius(self.cal_dot_radius_mm));
        }
        if self.dpi < 1 {
            return Err(ConfigError::InvalidDpi);
        }
        self.ring.validate()?;

        // Zero is reserved, leaving 2^bits - 1 candidate values.
        let max_code = 1u64 << self.bits;
        if self.markers_total as u64 >= max_code {
            return Err(ConfigError::TooManyMarkers {
                requested: self.markers_total,
                max_codes: max_code - 1,
                bits: self.bits,
            });
        }
        Ok(())
    }

    /// Warn when the padding is smaller than a marker diameter.
    pub fn overlap_warning(&self) -> Option<OverlapWarning> {
        let marker_radius_mm = marker_size(self.dot_radius_mm) / 2.0;
        (self.marker_padding_mm < marker_radius_mm * 2.0).then_some(OverlapWarning {
            padding_mm: self.marker_padding_mm,
            marker_radius_mm,
        })
    }

    /// Page composition inputs derived from this config.
    pub fn page_spec(&self) -> PageSpec {
        PageSpec {
            dot_radius_mm: self.dot_radius_mm,
            bits: self.bits,
            columns: self.columns,
            page_margin_mm: self.page_margin_mm,
            marker_padding_mm: self.marker_padding_mm,
            ring: self.ring,
            calibration: CalibrationSpec {
                dot_radius_mm: self.cal_dot_radius_mm,
                spacing_mm: self.cal_dot_spacing_mm,
                label: self.cal_label.clone(),
            },
        }
    }

    /// Load a JSON config from disk. Missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PrintError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(f: impl FnOnce(&mut TargetConfig)) -> TargetConfig {
        let mut cfg = TargetConfig::default();
        f(&mut cfg);
        cfg
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TargetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = with(|c| c.dot_radius_mm = -1.0).validate().unwrap_err();
        assert_eq!(err, ConfigError::InvalidDotRadius(-1.0));
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn zero_and_nan_radius_are_rejected() {
        assert!(with(|c| c.dot_radius_mm = 0.0).validate().is_err());
        assert!(with(|c| c.dot_radius_mm = f64::NAN).validate().is_err());
    }

    #[test]
    fn bits_outside_range_are_rejected() {
        for bits in [3, 17] {
            let err = with(|c| c.bits = bits).validate().unwrap_err();
            assert_eq!(err, ConfigError::BitsOutOfRange(bits));
            assert!(err.to_string().contains("between 4 and 16"));
        }
        assert!(with(|c| c.bits = 4).validate().is_ok());
        assert!(with(|c| c.bits = 16).validate().is_ok());
    }

    #[test]
    fn counts_must_be_positive() {
        assert_eq!(
            with(|c| c.columns = 0).validate(),
            Err(ConfigError::InvalidColumns)
        );
        assert_eq!(
            with(|c| c.markers_total = 0).validate(),
            Err(ConfigError::InvalidMarkerCount)
        );
    }

    #[test]
    fn spacing_constraints() {
        assert_eq!(
            with(|c| c.page_margin_mm = -0.5).validate(),
            Err(ConfigError::NegativeMargin(-0.5))
        );
        assert_eq!(
            with(|c| c.marker_padding_mm = -1.0).validate(),
            Err(ConfigError::NegativePadding(-1.0))
        );
        assert_eq!(
            with(|c| c.cal_dot_spacing_mm = 0.0).validate(),
            Err(ConfigError::InvalidCalibrationSpacing(0.0))
        );
        assert!(with(|c| c.page_margin_mm = 0.0).validate().is_ok());
        assert!(with(|c| c.marker_padding_mm = 0.0).validate().is_ok());
    }

    #[test]
    fn capacity_is_two_to_the_bits_minus_one() {
        let err = with(|c| {
            c.bits = 4;
            c.markers_total = 16;
        })
        .validate()
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooManyMarkers {
                requested: 16,
                max_codes: 15,
                bits: 4
            }
        );
        assert!(err.to_string().contains("maximum codes (15)"));

        let ok = with(|c| {
            c.bits = 4;
            c.markers_total = 15;
        });
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn extra_checks() {
        assert_eq!(with(|c| c.dpi = 0).validate(), Err(ConfigError::InvalidDpi));
        assert_eq!(
            with(|c| c.cal_dot_radius_mm = 0.0).validate(),
            Err(ConfigError::InvalidCalibrationRadius(0.0))
        );
        let bad_ring = with(|c| c.ring.outer_multiplier = 1.0);
        assert!(matches!(bad_ring.validate(), Err(ConfigError::Ring(_))));
    }

    #[test]
    fn overlap_warning_threshold() {
        let tight = with(|c| {
            c.dot_radius_mm = 3.0;
            c.marker_padding_mm = 2.0;
        });
        let warning = tight.overlap_warning().expect("warning");
        assert_eq!(warning.marker_radius_mm, 9.0);
        assert_eq!(warning.min_padding_mm(), 18.0);
        assert!(warning.to_string().contains("18.00mm"));

        let roomy = with(|c| {
            c.dot_radius_mm = 3.0;
            c.marker_padding_mm = 20.0;
        });
        assert!(roomy.overlap_warning().is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: TargetConfig =
            serde_json::from_str(r#"{ "bits": 12, "markers_total": 40 }"#).expect("parse");
        assert_eq!(cfg.bits, 12);
        assert_eq!(cfg.markers_total, 40);
        assert_eq!(cfg.columns, DEFAULT_COLUMNS);
        assert_eq!(cfg.ring, RingGeometry::default());
        assert_eq!(cfg.target_format, DocumentFormat::Svg);
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        let cfg = with(|c| {
            c.bits = 10;
            c.cal_label = "50 mm".to_owned();
            c.manifest_path = Some(PathBuf::from("manifest.json"));
        });
        cfg.write_json(&path).expect("write");
        assert_eq!(TargetConfig::load_json(&path).expect("load"), cfg);
    }
}

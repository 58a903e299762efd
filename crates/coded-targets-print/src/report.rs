//! Summary of a generation run, written as the JSON manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PrintError;
use crate::layout::PageLayout;

/// One marker as listed in the manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-based, matching the printed label and `target_<index>` file.
    pub index: usize,
    pub code: u32,
    /// MSB-first segment pattern.
    pub bit_pattern: String,
    pub row: usize,
    pub column: usize,
    /// Marker centre on the page, y-up millimetres.
    pub center_mm: [f64; 2],
}

impl ManifestEntry {
    pub fn from_layout(layout: &PageLayout) -> Vec<Self> {
        layout
            .markers
            .iter()
            .map(|m| Self {
                index: m.index + 1,
                code: m.code.value,
                bit_pattern: m.code.bit_string(),
                row: m.row,
                column: m.column,
                center_mm: [m.center_mm.x, m.center_mm.y],
            })
            .collect()
    }
}

/// What [`crate::generate`] produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub bits: u32,
    pub dot_radius_mm: f64,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    /// Markers requested; larger than `markers.len()` when the code space ran out.
    pub requested: usize,
    pub markers: Vec<ManifestEntry>,
    /// Set when the padding may let neighbouring markers touch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap_warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
    #[serde(default)]
    pub targets: Vec<PathBuf>,
}

impl GenerationReport {
    /// Codes in placement order.
    pub fn codes(&self) -> Vec<u32> {
        self.markers.iter().map(|m| m.code).collect()
    }

    /// True when fewer markers were placed than requested.
    #[inline]
    pub fn is_short(&self) -> bool {
        self.markers.len() < self.requested
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PrintError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

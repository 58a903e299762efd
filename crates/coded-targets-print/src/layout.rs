//! Grid placement of markers on a single page.
//!
//! Cells are `dot_radius * 6 + padding` square, filled row-major from the
//! top-left. The shape frame is y-up, so row 0 sits at the largest y.

use coded_targets_codes::RingCode;
use coded_targets_core::{
    calibration_feature, coded_marker, marker_label, marker_size, Canvas, RingGeometry,
};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::error::PrintError;

/// Height of the calibration dots above the page bottom, in page margins.
pub const CAL_POSITION_Y_MULTIPLIER: f64 = 0.8;

/// Calibration feature parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationSpec {
    pub dot_radius_mm: f64,
    pub spacing_mm: f64,
    pub label: String,
}

/// Inputs to [`compose_page`].
#[derive(Clone, Debug, PartialEq)]
pub struct PageSpec {
    pub dot_radius_mm: f64,
    pub bits: u32,
    pub columns: usize,
    pub page_margin_mm: f64,
    pub marker_padding_mm: f64,
    pub ring: RingGeometry,
    pub calibration: CalibrationSpec,
}

impl PageSpec {
    #[inline]
    pub fn cell_size_mm(&self) -> f64 {
        marker_size(self.dot_radius_mm) + self.marker_padding_mm
    }
}

/// One marker's slot on the page.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    /// 0-based position in the code sequence; labels print `index + 1`.
    pub index: usize,
    pub code: RingCode,
    pub row: usize,
    pub column: usize,
    pub center_mm: Point2<f64>,
}

/// Page geometry and marker placements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub rows: usize,
    pub columns: usize,
    pub cell_size_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub markers: Vec<PlacedMarker>,
    pub calibration_origin_mm: Point2<f64>,
}

impl PageLayout {
    /// Place `codes` on a grid described by `spec`.
    pub fn new(codes: &[u32], spec: &PageSpec) -> Result<Self, PrintError> {
        if spec.columns == 0 {
            return Err(ConfigError::InvalidColumns.into());
        }
        let columns = spec.columns;
        let rows = codes.len().div_ceil(columns);
        let cell = spec.cell_size_mm();
        let margin = spec.page_margin_mm;

        let width_mm = columns as f64 * cell + 2.0 * margin;
        let height_mm = rows as f64 * cell + 2.0 * margin;

        let markers = codes
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let code = RingCode::new(value, spec.bits)?;
                let row = index / columns;
                let column = index % columns;
                let cx = margin + column as f64 * cell + cell / 2.0;
                let cy = height_mm - (margin + row as f64 * cell + cell / 2.0);
                Ok(PlacedMarker {
                    index,
                    code,
                    row,
                    column,
                    center_mm: Point2::new(cx, cy),
                })
            })
            .collect::<Result<Vec<_>, PrintError>>()?;

        Ok(Self {
            rows,
            columns,
            cell_size_mm: cell,
            width_mm,
            height_mm,
            markers,
            calibration_origin_mm: Point2::new(margin, margin * CAL_POSITION_Y_MULTIPLIER),
        })
    }

    /// Marker at grid position `(row, column)`, if any.
    pub fn marker_at(&self, row: usize, column: usize) -> Option<&PlacedMarker> {
        self.markers
            .iter()
            .find(|m| m.row == row && m.column == column)
    }
}

/// A laid-out page ready for rendering.
#[derive(Clone, Debug)]
pub struct ComposedPage {
    pub layout: PageLayout,
    pub canvas: Canvas,
}

/// Lay out every code with its index label and add the calibration feature.
pub fn compose_page(codes: &[u32], spec: &PageSpec) -> Result<ComposedPage, PrintError> {
    let layout = PageLayout::new(codes, spec)?;
    let mut canvas = Canvas::new(layout.width_mm, layout.height_mm);

    for m in &layout.markers {
        canvas.extend(coded_marker(
            m.center_mm,
            spec.dot_radius_mm,
            m.code,
            &spec.ring,
        ));
        canvas
            .shapes
            .push(marker_label(m.center_mm, spec.dot_radius_mm, m.index));
    }

    canvas.extend(calibration_feature(
        layout.calibration_origin_mm,
        spec.calibration.dot_radius_mm,
        spec.calibration.spacing_mm,
        &spec.calibration.label,
    ));

    log::debug!(
        "composed {} markers on {}x{} grid, page {:.2}x{:.2} mm",
        layout.markers.len(),
        layout.rows,
        layout.columns,
        layout.width_mm,
        layout.height_mm
    );

    Ok(ComposedPage { layout, canvas })
}

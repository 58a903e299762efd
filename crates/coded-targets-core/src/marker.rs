//! Coded marker geometry: centre dot plus binary ring.

use coded_targets_codes::RingCode;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::shape::{AnnularWedge, Disc, HAlign, Shape, TextLabel, VAlign};

/// Side of the square a marker occupies, in dot radii.
pub const MARKER_SIZE_MULTIPLIER: f64 = 6.0;
/// Offset of the index label from the marker centre, in dot radii (both axes).
pub const LABEL_OFFSET_MULTIPLIER: f64 = 2.8;
/// Font size for marker index labels.
pub const LABEL_FONT_SIZE_PT: f64 = 6.0;

fn default_inner_multiplier() -> f64 {
    1.6
}

fn default_outer_multiplier() -> f64 {
    2.4
}

/// Ring radii relative to the dot radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    #[serde(default = "default_inner_multiplier")]
    pub inner_multiplier: f64,
    #[serde(default = "default_outer_multiplier")]
    pub outer_multiplier: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            inner_multiplier: default_inner_multiplier(),
            outer_multiplier: default_outer_multiplier(),
        }
    }
}

/// Ring geometry validation errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("ring inner multiplier must be > 0 (got {0})")]
    InvalidInner(f64),
    #[error("ring outer multiplier ({outer}) must exceed inner multiplier ({inner})")]
    EmptyRing { inner: f64, outer: f64 },
}

impl RingGeometry {
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.inner_multiplier.is_finite() || self.inner_multiplier <= 0.0 {
            return Err(GeometryError::InvalidInner(self.inner_multiplier));
        }
        if !self.outer_multiplier.is_finite() || self.outer_multiplier <= self.inner_multiplier {
            return Err(GeometryError::EmptyRing {
                inner: self.inner_multiplier,
                outer: self.outer_multiplier,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn inner_radius(&self, dot_radius: f64) -> f64 {
        dot_radius * self.inner_multiplier
    }

    #[inline]
    pub fn outer_radius(&self, dot_radius: f64) -> f64 {
        dot_radius * self.outer_multiplier
    }
}

/// Side length of the square cell a marker needs, without padding.
#[inline]
pub fn marker_size(dot_radius: f64) -> f64 {
    dot_radius * MARKER_SIZE_MULTIPLIER
}

/// Shapes for one marker: the centre dot followed by one wedge per set bit.
///
/// Segment `i` spans `[i, i + 1) * 360 / bits` degrees counter-clockwise
/// from +x.
pub fn coded_marker(
    center: Point2<f64>,
    dot_radius: f64,
    code: RingCode,
    ring: &RingGeometry,
) -> Vec<Shape> {
    let step = 360.0 / f64::from(code.bits);
    let inner_radius = ring.inner_radius(dot_radius);
    let outer_radius = ring.outer_radius(dot_radius);

    let mut shapes = Vec::with_capacity(1 + code.value.count_ones() as usize);
    shapes.push(Shape::Disc(Disc {
        center,
        radius: dot_radius,
    }));
    shapes.extend(code.filled_segments().map(|i| {
        Shape::Wedge(AnnularWedge {
            center,
            inner_radius,
            outer_radius,
            start_deg: f64::from(i) * step,
            end_deg: f64::from(i + 1) * step,
        })
    }));
    shapes
}

/// 1-based index label placed up and to the right of a marker.
pub fn marker_label(center: Point2<f64>, dot_radius: f64, index: usize) -> Shape {
    let offset = dot_radius * LABEL_OFFSET_MULTIPLIER;
    Shape::Label(TextLabel {
        anchor: Point2::new(center.x + offset, center.y + offset),
        text: (index + 1).to_string(),
        size_pt: LABEL_FONT_SIZE_PT,
        h_align: HAlign::Right,
        v_align: VAlign::Top,
    })
}

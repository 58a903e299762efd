//! Geometry for circular coded targets.
//!
//! Everything here is pure shape construction in millimetres; nothing touches
//! a file or a drawing library. Renderers in `coded-targets-print` consume the
//! [`Shape`]s built by:
//!
//! - [`coded_marker`]: centre dot plus one ring wedge per set code bit,
//! - [`marker_label`]: the 1-based index printed next to a marker,
//! - [`calibration_feature`]: two dots at a known spacing for checking print scale.

mod calibration;
mod logger;
mod marker;
mod shape;
pub mod units;

pub use calibration::{calibration_feature, CAL_LABEL_FONT_SIZE_PT, CAL_LABEL_OFFSET_MULTIPLIER};
pub use marker::{
    coded_marker, marker_label, marker_size, GeometryError, RingGeometry, LABEL_FONT_SIZE_PT,
    LABEL_OFFSET_MULTIPLIER, MARKER_SIZE_MULTIPLIER,
};
pub use shape::{AnnularWedge, Canvas, Disc, HAlign, Shape, TextLabel, VAlign};

pub use coded_targets_codes::RingCode;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

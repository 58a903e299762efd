//! Print-scale reference: two dots at a known centre-to-centre distance.
//!
//! Measuring the printed spacing with a ruler tells whether the printer
//! rescaled the page.

use nalgebra::Point2;

use crate::shape::{Disc, HAlign, Shape, TextLabel, VAlign};

/// Label drop below the dot centres, in calibration-dot radii.
pub const CAL_LABEL_OFFSET_MULTIPLIER: f64 = 2.5;
/// Font size for the calibration label.
pub const CAL_LABEL_FONT_SIZE_PT: f64 = 6.0;

/// Two discs `spacing` apart on a horizontal line starting at `origin`,
/// plus a centred label underneath.
pub fn calibration_feature(
    origin: Point2<f64>,
    dot_radius: f64,
    spacing: f64,
    label: &str,
) -> Vec<Shape> {
    let second = Point2::new(origin.x + spacing, origin.y);
    vec![
        Shape::Disc(Disc {
            center: origin,
            radius: dot_radius,
        }),
        Shape::Disc(Disc {
            center: second,
            radius: dot_radius,
        }),
        Shape::Label(TextLabel {
            anchor: Point2::new(
                origin.x + spacing / 2.0,
                origin.y - dot_radius * CAL_LABEL_OFFSET_MULTIPLIER,
            ),
            text: label.to_owned(),
            size_pt: CAL_LABEL_FONT_SIZE_PT,
            h_align: HAlign::Center,
            v_align: VAlign::Top,
        }),
    ]
}

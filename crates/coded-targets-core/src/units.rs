//! Length conversions between millimetres, points and pixels.

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;
/// PostScript points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_INCH / MM_PER_INCH
}

#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * MM_PER_INCH / POINTS_PER_INCH
}

/// Pixel length of `mm` at `dpi`.
#[inline]
pub fn mm_to_px(mm: f64, dpi: u32) -> f64 {
    mm / MM_PER_INCH * f64::from(dpi)
}

/// Pixels per metre at `dpi`, as stored in a PNG `pHYs` chunk.
#[inline]
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) * 1000.0 / MM_PER_INCH).round() as u32
}

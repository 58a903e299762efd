//! PNG raster output.
//!
//! Pixel size comes from `dpi`; the physical size is written to the `pHYs`
//! chunk so viewers and printers reproduce the millimetre dimensions.
//! Text labels are not rasterised.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use coded_targets_core::units::{dpi_to_pixels_per_meter, mm_to_px};
use coded_targets_core::{Canvas, Shape};
use nalgebra::Point2;

use super::CanvasRenderer;
use crate::error::PrintError;

/// Samples per pixel side for anti-aliasing.
const SUPERSAMPLE: usize = 4;
const MAX_PIXELS: u64 = 256 * 1024 * 1024;

/// Grayscale + alpha raster: black ink on a transparent background.
#[derive(Clone, Copy, Debug)]
pub struct PngRenderer {
    pub dpi: u32,
}

/// Coverage buffer in `[0, 1]` per pixel, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<f32>,
}

impl Raster {
    /// Alpha at pixel `(x, y)`, 0..=255.
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        (self.coverage[y * self.width + x].clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Rasterise the filled shapes of `canvas` at `dpi`.
pub fn rasterize(canvas: &Canvas, dpi: u32) -> Result<Raster, PrintError> {
    let width = mm_to_px(canvas.width_mm, dpi).round().max(1.0) as u64;
    let height = mm_to_px(canvas.height_mm, dpi).round().max(1.0) as u64;
    if width.saturating_mul(height) > MAX_PIXELS {
        return Err(PrintError::RasterTooLarge { width, height });
    }
    let (width, height) = (width as usize, height as usize);

    // Separate scales absorb the rounding of each side.
    let sx = width as f64 / canvas.width_mm;
    let sy = height as f64 / canvas.height_mm;
    let max = canvas.max();
    let mut coverage = vec![0.0f32; width * height];
    let weight = 1.0 / (SUPERSAMPLE * SUPERSAMPLE) as f32;

    for shape in &canvas.shapes {
        let Some((lo, hi)) = shape.bounds() else {
            continue;
        };
        let x0 = (((lo.x - canvas.min.x) * sx).floor().max(0.0) as usize).min(width);
        let x1 = (((hi.x - canvas.min.x) * sx).ceil().max(0.0) as usize).min(width);
        let y0 = (((max.y - hi.y) * sy).floor().max(0.0) as usize).min(height);
        let y1 = (((max.y - lo.y) * sy).ceil().max(0.0) as usize).min(height);

        for py in y0..y1 {
            for px in x0..x1 {
                let mut hits = 0usize;
                for j in 0..SUPERSAMPLE {
                    let fy = (py as f64 + (j as f64 + 0.5) / SUPERSAMPLE as f64) / sy;
                    for i in 0..SUPERSAMPLE {
                        let fx = (px as f64 + (i as f64 + 0.5) / SUPERSAMPLE as f64) / sx;
                        let p = Point2::new(canvas.min.x + fx, max.y - fy);
                        if shape.contains(p) {
                            hits += 1;
                        }
                    }
                }
                if hits > 0 {
                    coverage[py * width + px] += hits as f32 * weight;
                }
            }
        }
    }

    if canvas.labels().next().is_some() {
        log::debug!("png output omits text labels");
    }

    Ok(Raster {
        width,
        height,
        coverage,
    })
}

impl CanvasRenderer for PngRenderer {
    fn write(&self, canvas: &Canvas, path: &Path) -> Result<(), PrintError> {
        let raster = rasterize(canvas, self.dpi)?;
        let mut data = Vec::with_capacity(raster.width * raster.height * 2);
        for y in 0..raster.height {
            for x in 0..raster.width {
                data.push(0u8);
                data.push(raster.alpha(x, y));
            }
        }

        let file = BufWriter::new(File::create(path)?);
        let mut encoder = ::png::Encoder::new(file, raster.width as u32, raster.height as u32);
        encoder.set_color(::png::ColorType::GrayscaleAlpha);
        encoder.set_depth(::png::BitDepth::Eight);
        let ppm = dpi_to_pixels_per_meter(self.dpi);
        encoder.set_pixel_dims(Some(::png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: ::png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
        Ok(())
    }
}

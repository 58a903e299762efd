//! Single-page PDF output via `oxidize-pdf`.
//!
//! The page is exactly the canvas size converted to points. Ring arcs are
//! emitted as polylines with sub-degree steps, far below print resolution.

use std::path::Path;

use coded_targets_core::units::{mm_to_pt, pt_to_mm};
use coded_targets_core::{AnnularWedge, Canvas, HAlign, Shape, TextLabel, VAlign};
use nalgebra::Point2;
use oxidize_pdf::graphics::Color;
use oxidize_pdf::text::Font;
use oxidize_pdf::{Document, Page};

use super::{arc_angles, CanvasRenderer};
use crate::error::PrintError;

const ARC_STEP_DEG: f64 = 0.5;

/// Helvetica cap height and descender, in units of font size.
const HELVETICA_CAP_HEIGHT: f64 = 0.718;
const HELVETICA_DESCENT: f64 = 0.207;

/// Helvetica advance widths for ASCII 32..=126, per 1000 units of font size.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Advance width of `text` in millimetres at `size_pt`.
pub(crate) fn helvetica_width_mm(text: &str, size_pt: f64) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (32..=126).contains(&code) {
                u32::from(HELVETICA_WIDTHS[(code - 32) as usize])
            } else {
                556
            }
        })
        .sum();
    pt_to_mm(f64::from(units) / 1000.0 * size_pt)
}

/// Writes a one-page PDF.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfRenderer;

struct Frame {
    min: Point2<f64>,
}

impl Frame {
    /// Canvas millimetres to PDF points; both frames are y-up.
    fn map(&self, p: Point2<f64>) -> (f64, f64) {
        (mm_to_pt(p.x - self.min.x), mm_to_pt(p.y - self.min.y))
    }
}

fn draw_wedge(page: &mut Page, frame: &Frame, w: &AnnularWedge) {
    let outer = arc_angles(w.start_deg, w.end_deg, ARC_STEP_DEG);
    let inner = arc_angles(w.end_deg, w.start_deg, ARC_STEP_DEG);

    let gc = page.graphics();
    gc.set_fill_color(Color::black());
    let (x0, y0) = frame.map(w.point_at(w.outer_radius, outer[0]));
    gc.move_to(x0, y0);
    for &a in &outer[1..] {
        let (x, y) = frame.map(w.point_at(w.outer_radius, a));
        gc.line_to(x, y);
    }
    for &a in &inner {
        let (x, y) = frame.map(w.point_at(w.inner_radius, a));
        gc.line_to(x, y);
    }
    gc.line_to(x0, y0);
    gc.fill();
}

/// Baseline-left origin for a label, in canvas millimetres.
fn label_origin(l: &TextLabel) -> Point2<f64> {
    let width = helvetica_width_mm(&l.text, l.size_pt);
    let size_mm = pt_to_mm(l.size_pt);
    let x = match l.h_align {
        HAlign::Left => l.anchor.x,
        HAlign::Center => l.anchor.x - width / 2.0,
        HAlign::Right => l.anchor.x - width,
    };
    let y = match l.v_align {
        VAlign::Top => l.anchor.y - size_mm * HELVETICA_CAP_HEIGHT,
        VAlign::Middle => l.anchor.y - size_mm * HELVETICA_CAP_HEIGHT / 2.0,
        VAlign::Bottom => l.anchor.y + size_mm * HELVETICA_DESCENT,
    };
    Point2::new(x, y)
}

impl CanvasRenderer for PdfRenderer {
    fn write(&self, canvas: &Canvas, path: &Path) -> Result<(), PrintError> {
        let frame = Frame { min: canvas.min };
        let mut doc = Document::new();
        doc.set_title("Coded photogrammetry targets");

        let mut page = Page::new(mm_to_pt(canvas.width_mm), mm_to_pt(canvas.height_mm));
        for shape in &canvas.shapes {
            match shape {
                Shape::Disc(d) => {
                    let (x, y) = frame.map(d.center);
                    page.graphics()
                        .set_fill_color(Color::black())
                        .circle(x, y, mm_to_pt(d.radius))
                        .fill();
                }
                Shape::Wedge(w) => draw_wedge(&mut page, &frame, w),
                Shape::Label(l) => {
                    let (x, y) = frame.map(label_origin(l));
                    page.text()
                        .set_font(Font::Helvetica, l.size_pt)
                        .at(x, y)
                        .write(&l.text)?;
                }
            }
        }

        doc.add_page(page);
        doc.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn digit_widths() {
        // Helvetica digits are 556/1000 em.
        assert_relative_eq!(helvetica_width_mm("12", 72.0), 2.0 * 0.556 * 25.4, epsilon = 1e-9);
        assert_eq!(HELVETICA_WIDTHS[(b'0' - 32) as usize], 556);
        assert_eq!(HELVETICA_WIDTHS[(b'A' - 32) as usize], 667);
        assert_eq!(HELVETICA_WIDTHS[(b'z' - 32) as usize], 500);
        assert_eq!(HELVETICA_WIDTHS[(b'~' - 32) as usize], 584);
    }

    #[test]
    fn right_top_label_ends_at_anchor() {
        let l = TextLabel {
            anchor: Point2::new(50.0, 40.0),
            text: "12".to_owned(),
            size_pt: 6.0,
            h_align: HAlign::Right,
            v_align: VAlign::Top,
        };
        let o = label_origin(&l);
        assert_relative_eq!(o.x + helvetica_width_mm("12", 6.0), 50.0, epsilon = 1e-12);
        assert!(o.y < 40.0);
    }

    #[test]
    fn writes_pdf_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("page.pdf");
        let mut canvas = Canvas::new(50.0, 30.0);
        canvas.shapes.push(Shape::Disc(coded_targets_core::Disc {
            center: Point2::new(10.0, 10.0),
            radius: 3.0,
        }));
        canvas.shapes.push(Shape::Wedge(AnnularWedge {
            center: Point2::new(10.0, 10.0),
            inner_radius: 4.8,
            outer_radius: 7.2,
            start_deg: 0.0,
            end_deg: 45.0,
        }));
        PdfRenderer.write(&canvas, &path).expect("pdf");
        let bytes = std::fs::read(&path).expect("read");
        assert!(bytes.starts_with(b"%PDF"));
    }
}

//! SVG output. One user unit is one millimetre.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use coded_targets_core::units::pt_to_mm;
use coded_targets_core::{AnnularWedge, Canvas, Disc, HAlign, Shape, TextLabel, VAlign};
use nalgebra::Point2;

use super::{arc_angles, CanvasRenderer};
use crate::error::PrintError;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Writes plain SVG 1.1.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer;

impl CanvasRenderer for SvgRenderer {
    fn write(&self, canvas: &Canvas, path: &Path) -> Result<(), PrintError> {
        fs::write(path, render_svg(canvas))?;
        Ok(())
    }
}

/// Format a coordinate with at most four decimals.
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_owned(),
        _ => s.to_owned(),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Maps y-up canvas coordinates to y-down SVG coordinates.
struct Frame {
    min_x: f64,
    max_y: f64,
}

impl Frame {
    fn new(canvas: &Canvas) -> Self {
        Self {
            min_x: canvas.min.x,
            max_y: canvas.max().y,
        }
    }

    fn map(&self, p: Point2<f64>) -> (String, String) {
        (num(p.x - self.min_x), num(self.max_y - p.y))
    }
}

fn disc(out: &mut String, frame: &Frame, d: &Disc) {
    let (cx, cy) = frame.map(d.center);
    let _ = writeln!(out, r#"    <circle cx="{cx}" cy="{cy}" r="{}"/>"#, num(d.radius));
}

/// Annular sector as an arc path. Counter-clockwise on the page is
/// sweep-flag 0 once y points down.
fn wedge(out: &mut String, frame: &Frame, w: &AnnularWedge) {
    let outer = num(w.outer_radius);
    let inner = num(w.inner_radius);
    let mut d = String::new();

    let fwd = arc_angles(w.start_deg, w.end_deg, 90.0);
    let (x, y) = frame.map(w.point_at(w.outer_radius, fwd[0]));
    let _ = write!(d, "M{x} {y}");
    for &a in &fwd[1..] {
        let (x, y) = frame.map(w.point_at(w.outer_radius, a));
        let _ = write!(d, " A{outer} {outer} 0 0 0 {x} {y}");
    }

    let back = arc_angles(w.end_deg, w.start_deg, 90.0);
    let (x, y) = frame.map(w.point_at(w.inner_radius, back[0]));
    let _ = write!(d, " L{x} {y}");
    for &a in &back[1..] {
        let (x, y) = frame.map(w.point_at(w.inner_radius, a));
        let _ = write!(d, " A{inner} {inner} 0 0 1 {x} {y}");
    }
    d.push_str(" Z");

    let _ = writeln!(out, r#"    <path d="{d}"/>"#);
}

fn label(out: &mut String, frame: &Frame, l: &TextLabel) {
    let (x, y) = frame.map(l.anchor);
    let anchor = match l.h_align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    };
    let baseline = match l.v_align {
        VAlign::Top => "hanging",
        VAlign::Middle => "central",
        VAlign::Bottom => "text-after-edge",
    };
    let _ = writeln!(
        out,
        r#"  <text x="{x}" y="{y}" font-family="{FONT_FAMILY}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
        num(pt_to_mm(l.size_pt)),
        escape(&l.text)
    );
}

/// Serialize a canvas to an SVG document sized in millimetres.
pub fn render_svg(canvas: &Canvas) -> String {
    let frame = Frame::new(canvas);
    let w = num(canvas.width_mm);
    let h = num(canvas.height_mm);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#
    );

    out.push_str("  <g fill=\"#000000\" stroke=\"none\">\n");
    for shape in &canvas.shapes {
        match shape {
            Shape::Disc(d) => disc(&mut out, &frame, d),
            Shape::Wedge(wg) => wedge(&mut out, &frame, wg),
            Shape::Label(_) => {}
        }
    }
    out.push_str("  </g>\n");

    for l in canvas.labels() {
        label(&mut out, &frame, l);
    }
    out.push_str("</svg>\n");
    out
}

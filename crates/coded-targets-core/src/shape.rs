//! Renderer-neutral shape description.
//!
//! All coordinates are millimetres in a y-up frame. Angles are degrees,
//! measured counter-clockwise from +x.

use nalgebra::{Point2, Vector2};

/// Horizontal text alignment relative to the label anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the label anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Disc {
    #[inline]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }
}

/// Filled ring sector between two radii and two angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnularWedge {
    pub center: Point2<f64>,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl AnnularWedge {
    /// Angular extent in degrees.
    #[inline]
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Point at `radius` from the centre along direction `deg`.
    pub fn point_at(&self, radius: f64, deg: f64) -> Point2<f64> {
        let t = deg.to_radians();
        self.center + Vector2::new(t.cos(), t.sin()) * radius
    }

    /// Half-open containment: `[start, end)` in angle, `[inner, outer]` in radius.
    pub fn contains(&self, p: Point2<f64>) -> bool {
        let d = p - self.center;
        let r2 = d.norm_squared();
        if r2 < self.inner_radius * self.inner_radius || r2 > self.outer_radius * self.outer_radius
        {
            return false;
        }
        let deg = d.y.atan2(d.x).to_degrees();
        let rel = (deg - self.start_deg).rem_euclid(360.0);
        rel < self.sweep_deg()
    }
}

/// Text anchored at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub anchor: Point2<f64>,
    pub text: String,
    /// Font size in typographic points.
    pub size_pt: f64,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

/// One drawable element.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Disc(Disc),
    Wedge(AnnularWedge),
    Label(TextLabel),
}

impl Shape {
    /// Axis-aligned bounds of the filled area. Labels have none.
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let (c, r) = match self {
            Shape::Disc(d) => (d.center, d.radius),
            Shape::Wedge(w) => (w.center, w.outer_radius),
            Shape::Label(_) => return None,
        };
        let half = Vector2::new(r, r);
        Some((c - half, c + half))
    }

    /// True for filled geometry at `p`; labels never contain points.
    pub fn contains(&self, p: Point2<f64>) -> bool {
        match self {
            Shape::Disc(d) => d.contains(p),
            Shape::Wedge(w) => w.contains(p),
            Shape::Label(_) => false,
        }
    }
}

/// A rectangular drawing area and the shapes placed on it.
///
/// `min` is the lower-left corner in shape coordinates; renderers map it to
/// the bottom-left of the output.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pub min: Point2<f64>,
    pub width_mm: f64,
    pub height_mm: f64,
    pub shapes: Vec<Shape>,
}

impl Canvas {
    /// Canvas spanning `[0, width] x [0, height]`.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            min: Point2::origin(),
            width_mm,
            height_mm,
            shapes: Vec::new(),
        }
    }

    /// Square canvas of side `size_mm` centred on the origin.
    pub fn centered(size_mm: f64) -> Self {
        Self {
            min: Point2::new(-size_mm / 2.0, -size_mm / 2.0),
            width_mm: size_mm,
            height_mm: size_mm,
            shapes: Vec::new(),
        }
    }

    /// Upper-right corner in shape coordinates.
    #[inline]
    pub fn max(&self) -> Point2<f64> {
        self.min + Vector2::new(self.width_mm, self.height_mm)
    }

    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Label(l) => Some(l),
            _ => None,
        })
    }
}

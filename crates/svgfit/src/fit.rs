//! Derives uniform scale + translate transforms that recenter artwork inside a
//! square canvas or inscribe it in a circular region.

use crate::document::Geometry;
use crate::geom::{Bounds, Point};

/// Safety margin for circular fitting: content is scaled to 98% of the canvas
/// radius so strokes near the rim stay inside the circle.
pub const CIRCLE_MARGIN: f64 = 0.98;

/// Uniform scale followed by a translation, applied as
/// `x' = x * scale + tx`, `y' = y * scale + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl FitTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn scale_only(scale: f64) -> Self {
        Self {
            scale,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.scale + self.tx
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.scale + self.ty
    }

    pub fn apply(&self, p: Point) -> Point {
        crate::geom::point(self.apply_x(p.x), self.apply_y(p.y))
    }

    /// Lengths (e.g. circle radii) scale without translating.
    pub fn apply_length(&self, len: f64) -> f64 {
        len * self.scale
    }
}

/// Rectangular-center fit: scale the bounding box's larger extent to `target_size`
/// and map the box midpoint onto the canvas center.
pub fn center_in_canvas(bounds: &Bounds, canvas_size: f64, target_size: f64) -> FitTransform {
    let current_size = bounds.width().max(bounds.height());
    // Degenerate single-point content has no extent to scale.
    let scale = if current_size > 0.0 {
        target_size / current_size
    } else {
        1.0
    };

    let center = bounds.center();
    let canvas_center = canvas_size / 2.0;
    FitTransform {
        scale,
        tx: canvas_center - center.x * scale,
        ty: canvas_center - center.y * scale,
    }
}

/// Outcome of a circular-inscribe fit, including the sample point that limited
/// the scale factor.
#[derive(Debug, Clone, Copy)]
pub struct InscribeFit {
    pub transform: FitTransform,
    /// Pre-transform sample point that ends up farthest from the canvas center.
    pub critical_point: Point,
    /// Its distance from the canvas center after the provisional centering pass.
    pub max_distance: f64,
    pub target_radius: f64,
}

/// Circular-inscribe fit in two passes.
///
/// Pass one centers the bounding-box midpoint on the canvas center at scale 1 and
/// finds the sample point farthest from the center (the critical point). Pass two
/// scales that distance down to the target radius and recenters from the original
/// midpoint. Every sample point is then guaranteed to land within the target
/// radius, which a bounding-box-diagonal scale would not guarantee for
/// asymmetric artwork.
pub fn inscribe_in_circle(geometry: &Geometry, canvas_size: f64) -> InscribeFit {
    let center = geometry.bounds.center();
    let canvas_center = canvas_size / 2.0;

    // Provisional translate-only pass: box midpoint onto canvas center.
    let tx = canvas_center - center.x;
    let ty = canvas_center - center.y;

    let mut max_distance = 0.0_f64;
    let mut critical_point = center;
    for &p in &geometry.samples {
        let dx = (p.x + tx) - canvas_center;
        let dy = (p.y + ty) - canvas_center;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > max_distance {
            max_distance = dist;
            critical_point = p;
        }
    }

    let target_radius = canvas_center * CIRCLE_MARGIN;
    // A single-point document sits exactly on the center; leave it unscaled.
    let scale = if max_distance > 0.0 {
        target_radius / max_distance
    } else {
        1.0
    };

    InscribeFit {
        transform: FitTransform {
            scale,
            tx: canvas_center - center.x * scale,
            ty: canvas_center - center.y * scale,
        },
        critical_point,
        max_distance,
        target_radius,
    }
}

//! Scanning of the minimal document syntax: `<path d="...">` and
//! `<circle cx=".." cy=".." r="..">` occurrences plus the `viewBox` attribute.

use crate::geom::{Bounds, Point, point};
use crate::path::coordinate_pairs;
use regex::Regex;
use std::sync::OnceLock;

/// Fill applied to every re-serialized circle element.
pub const CIRCLE_FILL: &str = "#13aefe";

/// `d` attribute of a `<path>` element (scanning).
pub(crate) fn re_path_element() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r#"<path[^>]*\bd="([^"]*)""#).expect("valid regex"))
}

/// Any `d="..."` attribute (rewriting).
pub(crate) fn re_path_d() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r#"\bd="([^"]*)""#).expect("valid regex"))
}

pub(crate) fn re_circle() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r#"<circle[^>]*cx="(-?[\d.]+)"[^>]*cy="(-?[\d.]+)"[^>]*r="(-?[\d.]+)"[^>]*/?>"#)
            .expect("valid regex")
    })
}

pub(crate) fn re_viewbox() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r#"viewBox="([^"]*)""#).expect("valid regex"))
}

/// Path `d` strings that must be left untouched.
///
/// A fill/background path is assumed to already span the canvas; it contributes no
/// sample points and is never rewritten. Matching is a literal prefix test against
/// the trimmed `d` data.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    prefixes: Vec<String>,
}

impl ExclusionRules {
    pub fn new(prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Rule matching the full-canvas fill rectangle of a square canvas,
    /// e.g. a path starting `M 1000.00 0.00` on a 1000-unit canvas.
    pub fn canvas_fill(canvas_size: f64) -> Self {
        Self::new([format!("M {canvas_size:.2} 0.00")])
    }

    pub fn is_excluded(&self, d: &str) -> bool {
        let d = d.trim_start();
        self.prefixes.iter().any(|p| d.starts_with(p.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl CirclePrimitive {
    /// 8 perimeter points at 45° increments, approximating the circle's extent
    /// without true ellipse math.
    pub fn perimeter_points(&self) -> [Point; 8] {
        std::array::from_fn(|i| {
            let rad = (i as f64 * 45.0).to_radians();
            point(self.cx + self.r * rad.cos(), self.cy + self.r * rad.sin())
        })
    }

    pub fn bounding_square(&self) -> Bounds {
        Bounds {
            min_x: self.cx - self.r,
            min_y: self.cy - self.r,
            max_x: self.cx + self.r,
            max_y: self.cy + self.r,
        }
    }
}

pub(crate) fn scan_circles(doc: &str) -> Vec<CirclePrimitive> {
    re_circle()
        .captures_iter(doc)
        .filter_map(|caps| {
            Some(CirclePrimitive {
                cx: caps.get(1)?.as_str().parse().ok()?,
                cy: caps.get(2)?.as_str().parse().ok()?,
                r: caps.get(3)?.as_str().parse().ok()?,
            })
        })
        .collect()
}

/// Bounds plus the ordered sample-point set backing a fit computation.
///
/// Only constructed for documents that yielded at least one sample point, so
/// `bounds` always covers `samples`. Circle bounding squares are folded into
/// `bounds` directly while `samples` carries the 8 perimeter points.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub bounds: Bounds,
    pub samples: Vec<Point>,
}

/// Scans a document for path and circle geometry, skipping excluded paths.
///
/// Returns `None` when zero sample points were found; callers must treat that as
/// an error, never as a zero-size box at the origin.
pub fn scan_geometry(doc: &str, rules: &ExclusionRules) -> Option<Geometry> {
    fn include(b: &mut Option<Bounds>, p: Point) {
        match b {
            Some(b) => b.include(p),
            None => *b = Bounds::from_points([p]),
        }
    }

    let mut samples: Vec<Point> = Vec::new();
    let mut bounds: Option<Bounds> = None;

    for caps in re_path_element().captures_iter(doc) {
        let d = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if rules.is_excluded(d) {
            continue;
        }
        for p in coordinate_pairs(d) {
            include(&mut bounds, p);
            samples.push(p);
        }
    }

    for circle in scan_circles(doc) {
        let square = circle.bounding_square();
        include(&mut bounds, point(square.min_x, square.min_y));
        include(&mut bounds, point(square.max_x, square.max_y));
        for p in circle.perimeter_points() {
            include(&mut bounds, p);
            samples.push(p);
        }
    }

    let bounds = bounds?;
    if samples.is_empty() {
        return None;
    }
    Some(Geometry { bounds, samples })
}

/// Reads the square document size from the `viewBox` attribute (its width entry).
pub(crate) fn viewbox_size(doc: &str) -> Option<f64> {
    let caps = re_viewbox().captures(doc)?;
    let parts: Vec<f64> = caps
        .get(1)?
        .as_str()
        .split_whitespace()
        .filter_map(|t| t.parse().ok())
        .collect();
    if parts.len() < 4 {
        return None;
    }
    Some(parts[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_fill_rule_matches_prefix_only() {
        let rules = ExclusionRules::canvas_fill(1000.0);
        assert!(rules.is_excluded("M 1000.00 0.00 L 0.00 0.00 Z"));
        assert!(rules.is_excluded("  M 1000.00 0.00 L 0.00 0.00 Z"));
        assert!(!rules.is_excluded("M 10.00 1000.00 L 0.00 0.00 Z"));
    }

    #[test]
    fn circle_perimeter_hits_axis_extremes() {
        let c = CirclePrimitive {
            cx: 10.0,
            cy: 20.0,
            r: 5.0,
        };
        let pts = c.perimeter_points();
        assert!((pts[0].x - 15.0).abs() < 1e-9);
        assert!((pts[0].y - 20.0).abs() < 1e-9);
        assert!((pts[4].x - 5.0).abs() < 1e-9);
        assert!((pts[2].y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn viewbox_size_reads_width_entry() {
        assert_eq!(
            viewbox_size(r#"<svg viewBox="0 0 1000 1000">"#),
            Some(1000.0)
        );
        assert_eq!(viewbox_size(r#"<svg width="1000">"#), None);
    }
}

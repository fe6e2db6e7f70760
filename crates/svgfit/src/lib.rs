#![forbid(unsafe_code)]

//! Headless SVG symbol fitting.
//!
//! Parses a minimal path/circle mini-language, computes bounds over sampled
//! points, derives uniform scale + translate transforms, and rewrites the
//! coordinates in place. Design goals:
//! - deterministic, purely textual in/out (callers own all file I/O)
//! - recoverable, structured errors; no panics in library code
//! - layout-preserving rewrites (only numeric tokens change)

pub mod document;
pub mod error;
pub mod fit;
pub mod geom;
pub mod path;
pub mod reverse;
pub mod rewrite;

pub use document::{CIRCLE_FILL, CirclePrimitive, ExclusionRules, Geometry, scan_geometry};
pub use error::{Error, Result};
pub use fit::{CIRCLE_MARGIN, FitTransform, InscribeFit, center_in_canvas, inscribe_in_circle};
pub use geom::{Bounds, Point, Vector};
pub use path::{PathCommand, PathParse, coordinate_pairs, parse_path_data};
pub use reverse::reverse_path;
pub use rewrite::{transform_document, transform_path_data};

/// Outcome of a whole-document fit operation.
#[derive(Debug, Clone)]
pub struct FitReport {
    /// Rewritten document text; the only artifact handed back to callers.
    pub document: String,
    pub transform: FitTransform,
    /// Pre-transform bounds of the sampled geometry.
    pub bounds: Bounds,
    /// Present for circular fits: the critical point and limiting distance.
    pub inscribe: Option<InscribeFit>,
}

/// Rescales a square document to `new_size`, reading the original size from its
/// `viewBox`.
///
/// Every coordinate (including fill/background paths) is multiplied by
/// `new_size / original_size` and the viewBox is rewritten; nothing is
/// translated.
pub fn resize_document(doc: &str, new_size: f64) -> Result<String> {
    let original = document::viewbox_size(doc)
        .ok_or_else(|| Error::malformed("document has no usable viewBox attribute"))?;
    if original <= 0.0 {
        return Err(Error::malformed("viewBox size must be positive"));
    }

    let transform = FitTransform::scale_only(new_size / original);
    tracing::debug!(original, new_size, scale = transform.scale, "resizing document");

    let doc = rewrite::rewrite_viewbox(doc, new_size);
    Ok(transform_document(
        &doc,
        &transform,
        &ExclusionRules::default(),
    ))
}

/// Scales the symbol so its larger extent becomes `target_size` and centers it on
/// a `canvas_size` square canvas.
pub fn scale_and_center(
    doc: &str,
    canvas_size: f64,
    target_size: f64,
    rules: &ExclusionRules,
) -> Result<FitReport> {
    let geometry = scan_geometry(doc, rules).ok_or(Error::EmptyGeometry)?;
    let transform = center_in_canvas(&geometry.bounds, canvas_size, target_size);
    tracing::debug!(
        scale = transform.scale,
        tx = transform.tx,
        ty = transform.ty,
        "derived rectangular-center transform"
    );

    Ok(FitReport {
        document: transform_document(doc, &transform, rules),
        transform,
        bounds: geometry.bounds,
        inscribe: None,
    })
}

/// Fits the symbol inside the circle inscribed in a `canvas_size` square canvas,
/// e.g. for circular profile pictures.
pub fn fit_circular(doc: &str, canvas_size: f64, rules: &ExclusionRules) -> Result<FitReport> {
    let geometry = scan_geometry(doc, rules).ok_or(Error::EmptyGeometry)?;
    let fit = inscribe_in_circle(&geometry, canvas_size);
    tracing::debug!(
        scale = fit.transform.scale,
        max_distance = fit.max_distance,
        target_radius = fit.target_radius,
        "derived circular-inscribe transform"
    );

    Ok(FitReport {
        document: transform_document(doc, &fit.transform, rules),
        transform: fit.transform,
        bounds: geometry.bounds,
        inscribe: Some(fit),
    })
}

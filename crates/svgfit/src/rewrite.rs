//! In-place rewriting of path and circle coordinates.
//!
//! Numeric tokens are replaced where they sit, so command letters and the original
//! whitespace/comma layout survive byte-for-byte; only the numbers change, formatted
//! to 2 decimal places.

use crate::document::{CIRCLE_FILL, ExclusionRules, re_circle, re_path_d, re_viewbox};
use crate::fit::FitTransform;
use crate::path::re_token;

/// Rewrites every numeric token of one `d` attribute.
///
/// Tokens are classified as x or y by a running index that resets at each command
/// letter, so a `Z` (or an unrecognized letter) mid-string cannot desynchronize the
/// alternation for the rest of the path. All recognized commands list their
/// arguments in (x, y) pairs, which makes per-command parity sufficient.
pub fn transform_path_data(d: &str, transform: &FitTransform) -> String {
    let mut out = String::with_capacity(d.len() + 16);
    let mut last = 0usize;
    // Explicit per-command coordinate index; x at even positions, y at odd.
    let mut coord_index = 0usize;

    for m in re_token().find_iter(d) {
        out.push_str(&d[last..m.start()]);
        last = m.end();

        let tok = m.as_str();
        if tok.len() == 1 && tok.as_bytes()[0].is_ascii_alphabetic() {
            coord_index = 0;
            out.push_str(tok);
            continue;
        }
        let Ok(v) = tok.parse::<f64>() else {
            out.push_str(tok);
            continue;
        };
        let mapped = if coord_index % 2 == 0 {
            transform.apply_x(v)
        } else {
            transform.apply_y(v)
        };
        coord_index += 1;
        out.push_str(&format!("{mapped:.2}"));
    }
    out.push_str(&d[last..]);
    out
}

/// Applies a transform to every non-excluded path and every circle in the document.
///
/// Excluded paths are emitted byte-identical. Circles are re-serialized with the
/// fixed fill color; `cx`/`cy` get the full transform, `r` scales only.
pub fn transform_document(doc: &str, transform: &FitTransform, rules: &ExclusionRules) -> String {
    let doc = re_path_d().replace_all(doc, |caps: &regex::Captures<'_>| {
        let d = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if rules.is_excluded(d) {
            return caps.get(0).map(|m| m.as_str()).unwrap_or_default().to_string();
        }
        format!(r#"d="{}""#, transform_path_data(d, transform))
    });

    re_circle()
        .replace_all(&doc, |caps: &regex::Captures<'_>| {
            let parsed = (
                caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()),
                caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok()),
                caps.get(3).and_then(|m| m.as_str().parse::<f64>().ok()),
            );
            let (Some(cx), Some(cy), Some(r)) = parsed else {
                return caps.get(0).map(|m| m.as_str()).unwrap_or_default().to_string();
            };
            format!(
                r#"<circle fill="{CIRCLE_FILL}" cx="{:.2}" cy="{:.2}" r="{:.2}" />"#,
                transform.apply_x(cx),
                transform.apply_y(cy),
                transform.apply_length(r)
            )
        })
        .to_string()
}

/// Replaces the `viewBox` attribute with a square origin box of the new size.
pub(crate) fn rewrite_viewbox(doc: &str, new_size: f64) -> String {
    re_viewbox()
        .replace_all(
            doc,
            format!(r#"viewBox="0.00 0.00 {new_size:.2} {new_size:.2}""#).as_str(),
        )
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_preserved_verbatim() {
        let t = FitTransform::scale_only(2.0);
        assert_eq!(
            transform_path_data("M 1.5 2,  3 4.25", &t),
            "M 3.00 4.00,  6.00 8.50"
        );
    }

    #[test]
    fn close_command_resets_pair_phase() {
        let t = FitTransform {
            scale: 1.0,
            tx: 10.0,
            ty: 0.0,
        };
        // The stray third number after L leaves the phase on "y"; the next command
        // letter must reset it so 5 is treated as an x again.
        assert_eq!(
            transform_path_data("L 1 2 3 M 5 6", &t),
            "L 11.00 2.00 13.00 M 15.00 6.00"
        );
    }
}

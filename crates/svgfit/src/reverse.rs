//! Reverses the traversal direction of a single closed path.

use crate::error::{Error, Result};
use crate::geom::Point;
use crate::path::{PathCommand, parse_path_data};

/// Rewrites one closed path so the same outline is traced in the opposite
/// direction (e.g. counter-clockwise to clockwise).
///
/// The trailing `Z` is stripped, commands are walked last to first with each one
/// re-targeted at its predecessor's endpoint, and a fresh `Z` closes the result.
/// Cubic control points swap order; a quadratic's single control point is
/// geometrically symmetric under reversal and is reused as-is.
pub fn reverse_path(d: &str) -> Result<String> {
    let mut commands = parse_path_data(d).commands;
    if matches!(commands.last(), Some(PathCommand::ClosePath)) {
        commands.pop();
    }

    // Endpoint chain: points[i] is the current point after commands[i].
    let mut points: Vec<Point> = Vec::with_capacity(commands.len());
    for cmd in &commands {
        match cmd.end_point() {
            Some(p) => points.push(p),
            None => {
                return Err(Error::malformed(
                    "cannot reverse a path with an inner close command",
                ));
            }
        }
    }
    let Some(&last_point) = points.last() else {
        return Err(Error::EmptyGeometry);
    };

    let mut reversed: Vec<PathCommand> = Vec::with_capacity(commands.len() + 1);
    reversed.push(PathCommand::MoveTo(last_point));
    for i in (1..commands.len()).rev() {
        let prev = points[i - 1];
        match commands[i] {
            PathCommand::LineTo(_) => reversed.push(PathCommand::LineTo(prev)),
            PathCommand::CubicCurveTo { ctrl1, ctrl2, .. } => {
                reversed.push(PathCommand::CubicCurveTo {
                    ctrl1: ctrl2,
                    ctrl2: ctrl1,
                    to: prev,
                });
            }
            PathCommand::QuadCurveTo { ctrl, .. } => {
                reversed.push(PathCommand::QuadCurveTo { ctrl, to: prev });
            }
            // A mid-path MoveTo would start a second subpath; it cannot be
            // re-targeted, so it contributes nothing to the reversed walk.
            PathCommand::MoveTo(_) | PathCommand::ClosePath => {}
        }
    }
    reversed.push(PathCommand::ClosePath);

    Ok(render_commands(&reversed))
}

/// 2-decimal fixed-point serialization; `C`/`Q` point groups comma-separated,
/// commands newline + two-space indented.
fn render_commands(commands: &[PathCommand]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(commands.len());
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => lines.push(format!("M {:.2} {:.2}", p.x, p.y)),
            PathCommand::LineTo(p) => lines.push(format!("L {:.2} {:.2}", p.x, p.y)),
            PathCommand::QuadCurveTo { ctrl, to } => lines.push(format!(
                "Q {:.2} {:.2}, {:.2} {:.2}",
                ctrl.x, ctrl.y, to.x, to.y
            )),
            PathCommand::CubicCurveTo { ctrl1, ctrl2, to } => lines.push(format!(
                "C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            PathCommand::ClosePath => lines.push("Z".to_string()),
        }
    }
    lines.join("\n  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(reverse_path(""), Err(Error::EmptyGeometry)));
        assert!(matches!(reverse_path("Z"), Err(Error::EmptyGeometry)));
    }

    #[test]
    fn inner_close_is_rejected() {
        let err = reverse_path("M 0 0 L 1 0 Z L 0 1 Z");
        assert!(matches!(err, Err(Error::MalformedInput { .. })));
    }
}

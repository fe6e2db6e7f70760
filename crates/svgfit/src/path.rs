//! Tokenizer for the path-data mini-language.
//!
//! Recognized commands: `M L C Q Z` (and their lowercase forms). Lowercase letters are
//! consumed with the same arity table but their coordinates are still treated as
//! absolute; relative semantics are out of scope and flagged via `tracing::warn`.

use crate::geom::{Point, point};
use regex::Regex;
use std::sync::OnceLock;

fn re_number() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"[-+]?(?:\d+\.\d+|\d+\.|\.\d+|\d+)").expect("valid regex"))
}

/// Matches either a single command letter or a signed decimal number.
pub(crate) fn re_token() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"[A-Za-z]|[-+]?(?:\d+\.\d+|\d+\.|\.\d+|\d+)").expect("valid regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { ctrl: Point, to: Point },
    CubicCurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    ClosePath,
}

impl PathCommand {
    /// The command's resulting current point (`None` for `ClosePath`).
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(p),
            Self::QuadCurveTo { to, .. } | Self::CubicCurveTo { to, .. } => Some(to),
            Self::ClosePath => None,
        }
    }
}

/// Numeric argument count per command letter. `None` for letters outside the
/// recognized set.
pub(crate) fn arity(cmd: char) -> Option<usize> {
    match cmd {
        'M' | 'm' | 'L' | 'l' => Some(2),
        'Q' | 'q' => Some(4),
        'C' | 'c' => Some(6),
        'Z' | 'z' => Some(0),
        _ => None,
    }
}

/// Outcome of tokenizing one `d` attribute.
///
/// Skipped letters and dropped argument groups are non-fatal, but they are surfaced
/// here (and logged) so silent data loss stays visible to callers.
#[derive(Debug, Clone, Default)]
pub struct PathParse {
    pub commands: Vec<PathCommand>,
    /// Command letters outside the recognized set, in encounter order.
    pub skipped: Vec<char>,
    /// Number of argument groups dropped because too few numbers followed the letter.
    pub truncated_groups: usize,
}

enum Token {
    Letter(char),
    Number(f64),
}

fn tokenize(d: &str) -> Vec<Token> {
    re_token()
        .find_iter(d)
        .filter_map(|m| {
            let tok = m.as_str();
            let ch = tok.chars().next()?;
            if tok.len() == 1 && ch.is_ascii_alphabetic() {
                Some(Token::Letter(ch))
            } else {
                tok.parse::<f64>().ok().map(Token::Number)
            }
        })
        .collect()
}

fn command_from(cmd: char, args: &[f64]) -> Option<PathCommand> {
    match cmd.to_ascii_uppercase() {
        'M' => Some(PathCommand::MoveTo(point(args[0], args[1]))),
        'L' => Some(PathCommand::LineTo(point(args[0], args[1]))),
        'Q' => Some(PathCommand::QuadCurveTo {
            ctrl: point(args[0], args[1]),
            to: point(args[2], args[3]),
        }),
        'C' => Some(PathCommand::CubicCurveTo {
            ctrl1: point(args[0], args[1]),
            ctrl2: point(args[2], args[3]),
            to: point(args[4], args[5]),
        }),
        'Z' => Some(PathCommand::ClosePath),
        _ => None,
    }
}

/// Tokenizes a path-data string into commands.
pub fn parse_path_data(d: &str) -> PathParse {
    let tokens = tokenize(d.trim());
    let mut out = PathParse::default();

    let mut i = 0usize;
    while i < tokens.len() {
        let Token::Letter(cmd) = tokens[i] else {
            // Stray number outside any command group.
            i += 1;
            continue;
        };
        i += 1;

        let Some(count) = arity(cmd) else {
            tracing::warn!(command = %cmd, "skipping unsupported path command");
            out.skipped.push(cmd);
            continue;
        };
        if cmd.is_ascii_lowercase() && cmd != 'z' {
            tracing::warn!(command = %cmd, "relative command treated as absolute");
        }

        let mut args: Vec<f64> = Vec::with_capacity(count);
        while args.len() < count {
            match tokens.get(i) {
                Some(Token::Number(v)) => {
                    args.push(*v);
                    i += 1;
                }
                _ => break,
            }
        }
        if args.len() < count {
            // Partial trailing group: dropped, never a half-built command.
            tracing::warn!(
                command = %cmd,
                expected = count,
                found = args.len(),
                "dropping incomplete argument group"
            );
            out.truncated_groups += 1;
            continue;
        }

        if let Some(c) = command_from(cmd, &args) {
            out.commands.push(c);
        }
    }

    out
}

/// Raw sequential pairing of every number in `text`, two at a time.
///
/// This is the lighter-weight pass used for bounds sampling; it does not interpret
/// command structure, and a trailing unpaired number is ignored.
pub fn coordinate_pairs(text: &str) -> Vec<Point> {
    let numbers: Vec<f64> = re_number()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();
    numbers
        .chunks_exact(2)
        .map(|pair| point(pair[0], pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_table_matches_command_set() {
        assert_eq!(arity('M'), Some(2));
        assert_eq!(arity('l'), Some(2));
        assert_eq!(arity('Q'), Some(4));
        assert_eq!(arity('c'), Some(6));
        assert_eq!(arity('Z'), Some(0));
        assert_eq!(arity('A'), None);
    }

    #[test]
    fn coordinate_pairs_ignores_trailing_unpaired_number() {
        let pairs = coordinate_pairs("M 1 2 L 3 4 5");
        assert_eq!(pairs, vec![point(1.0, 2.0), point(3.0, 4.0)]);
    }

    #[test]
    fn negative_and_fractional_numbers_tokenize() {
        let parse = parse_path_data("M -1.5 .25 L 3. -4");
        assert_eq!(
            parse.commands,
            vec![
                PathCommand::MoveTo(point(-1.5, 0.25)),
                PathCommand::LineTo(point(3.0, -4.0)),
            ]
        );
    }
}
